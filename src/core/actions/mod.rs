pub mod premultiply;
