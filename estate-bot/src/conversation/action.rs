//! Button action tokens, `<namespace>:<action-or-id>`.
//!
//! | Token | Action |
//! |---|---|
//! | `page:next`, `page:prev` | move through the building list |
//! | `units:next:<key>`, `units:prev:<key>` | move through a building's units |
//! | `group:<key>` | open a building |
//! | `item:<id>` | open a unit |
//! | `back:groups` | back to the building list |
//! | `back:group:<key>` | back to a building |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackTarget {
    Groups,
    Group(String),
}

/// A decoded button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Paginate(PageDirection),
    /// Page through the units of the building with this key.
    PaginateGroup(String, PageDirection),
    OpenGroup(String),
    OpenItem(i64),
    GoBack(BackTarget),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown action token: {0}")]
pub struct ActionParseError(pub String);

impl FromStr for CallbackAction {
    type Err = ActionParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || ActionParseError(token.to_string());
        let (namespace, rest) = token.split_once(':').ok_or_else(unknown)?;

        match (namespace, rest) {
            ("page", "next") => Ok(CallbackAction::Paginate(PageDirection::Next)),
            ("page", "prev") => Ok(CallbackAction::Paginate(PageDirection::Prev)),
            ("units", rest) => {
                let (direction, key) = rest.split_once(':').ok_or_else(unknown)?;
                let direction = match direction {
                    "next" => PageDirection::Next,
                    "prev" => PageDirection::Prev,
                    _ => return Err(unknown()),
                };
                if key.is_empty() {
                    return Err(unknown());
                }
                Ok(CallbackAction::PaginateGroup(key.to_string(), direction))
            }
            ("group", key) if !key.is_empty() => Ok(CallbackAction::OpenGroup(key.to_string())),
            ("item", id) => id
                .parse()
                .map(CallbackAction::OpenItem)
                .map_err(|_| unknown()),
            ("back", "groups") => Ok(CallbackAction::GoBack(BackTarget::Groups)),
            ("back", target) => match target.split_once(':') {
                Some(("group", key)) if !key.is_empty() => {
                    Ok(CallbackAction::GoBack(BackTarget::Group(key.to_string())))
                }
                _ => Err(unknown()),
            },
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackAction::Paginate(PageDirection::Next) => f.write_str("page:next"),
            CallbackAction::Paginate(PageDirection::Prev) => f.write_str("page:prev"),
            CallbackAction::PaginateGroup(key, PageDirection::Next) => write!(f, "units:next:{}", key),
            CallbackAction::PaginateGroup(key, PageDirection::Prev) => write!(f, "units:prev:{}", key),
            CallbackAction::OpenGroup(key) => write!(f, "group:{}", key),
            CallbackAction::OpenItem(id) => write!(f, "item:{}", id),
            CallbackAction::GoBack(BackTarget::Groups) => f.write_str("back:groups"),
            CallbackAction::GoBack(BackTarget::Group(key)) => write!(f, "back:group:{}", key),
        }
    }
}
