//! UI Components
//!
//! Leptos views and the pieces they are built from.

mod delete_confirm_button;
mod login_form;
mod nav_bar;
mod new_todo_form;
mod private_route;
mod register_form;
mod todo_list;
mod todo_row;
mod user_settings;

pub use delete_confirm_button::DeleteConfirmButton;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use new_todo_form::NewTodoForm;
pub use private_route::PrivateRoute;
pub use register_form::RegisterForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use user_settings::UserSettings;
