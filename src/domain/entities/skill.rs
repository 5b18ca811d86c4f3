use serde::{Deserialize, Serialize};
use validator::Validate;

use super::catalog::ProjectIcon;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Skill {
    /// Natural key: at most one skill per name. There is no rename
    /// operation; renaming means delete plus recreate.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: u8,

    pub icon: ProjectIcon,
}
