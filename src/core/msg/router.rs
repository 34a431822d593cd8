use serde::{Deserialize, Serialize};

use crate::domain::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouterMsg {
    Navigate(Route),
    /// Raw path, resolved through the route table
    NavigatePath(String),
}
