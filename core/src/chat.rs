//! Recognition of mining feedback in game chat.

use crate::catalog::{self, RockType};
use crate::events::ChatKind;

const MINED_PREFIX: &str = "You manage to mine some ";

/// Rock type named by a successful-mining message, e.g.
/// "You manage to mine some iron." -> Iron.
pub fn mined_ore(kind: ChatKind, message: &str) -> Option<RockType> {
    if kind != ChatKind::Filtered {
        return None;
    }
    let ore_name = message.strip_prefix(MINED_PREFIX)?;
    catalog::lookup_by_name(&ore_name.replace('.', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mined_ore_message() {
        assert_eq!(
            mined_ore(ChatKind::Filtered, "You manage to mine some iron."),
            Some(RockType::Iron)
        );
        assert_eq!(
            mined_ore(ChatKind::Filtered, "You manage to mine some runite."),
            Some(RockType::Runite)
        );
    }

    #[test]
    fn test_other_channels_are_ignored() {
        assert_eq!(mined_ore(ChatKind::Public, "You manage to mine some iron."), None);
    }

    #[test]
    fn test_unrelated_or_unknown_messages() {
        assert_eq!(mined_ore(ChatKind::Filtered, "You swing your pick at the rock."), None);
        assert_eq!(mined_ore(ChatKind::Filtered, "You manage to mine some bronze."), None);
        assert_eq!(mined_ore(ChatKind::Filtered, ""), None);
    }
}
