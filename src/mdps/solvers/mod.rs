pub mod value_iteration;
