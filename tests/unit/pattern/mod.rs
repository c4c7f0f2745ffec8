pub mod validity;
