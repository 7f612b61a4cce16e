pub mod describe;
pub mod list;
pub mod remote;
pub mod run;
