pub mod communities;
