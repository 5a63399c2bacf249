/// Tests of the public rendering and configuration API, no database involved
pub mod comment_sql;
pub mod config;
