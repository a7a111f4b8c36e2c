pub mod alias;
pub mod completion;
pub mod deploy;
pub mod status;
