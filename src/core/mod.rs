pub mod debounce;
pub mod derive;
pub mod mutate;
pub mod transfer;
pub mod validate;
