mod home;
pub use home::Home;

mod cart;
pub use cart::Cart;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;
