pub mod toast_container;
