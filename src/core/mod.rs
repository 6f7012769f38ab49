pub mod assimilation;
pub mod converter;
pub mod dispatcher;
pub mod tables;
pub mod unicode;
pub mod utf8;
