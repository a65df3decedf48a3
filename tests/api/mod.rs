mod block_tests;
mod health_tests;
mod like_tests;
mod post_tests;
mod user_tests;
