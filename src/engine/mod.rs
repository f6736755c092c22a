pub mod guard;
pub mod lookup;
pub mod schema;
pub mod validator;
