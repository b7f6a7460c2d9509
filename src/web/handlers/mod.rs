pub mod moderate;
