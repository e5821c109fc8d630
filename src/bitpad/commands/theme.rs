use crate::accounts::{AccountStore, CredentialVerifier};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::storage::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run<S: StorageBackend, V: CredentialVerifier>(
    accounts: &mut AccountStore<S, V>,
    action: ThemeAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let theme = match action {
        ThemeAction::Show => accounts.theme(),
        ThemeAction::Set(theme) => {
            accounts.set_theme(theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
            theme
        }
        ThemeAction::Toggle => {
            let theme = accounts.toggle_theme()?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
            theme
        }
    };
    Ok(result.with_theme(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn toggling_flips_the_effective_theme() {
        let mut accounts = AccountStore::open(MemoryStorage::new());

        let shown = run(&mut accounts, ThemeAction::Show).unwrap();
        assert_eq!(shown.theme, Some(Theme::Light));

        let toggled = run(&mut accounts, ThemeAction::Toggle).unwrap();
        assert_eq!(toggled.theme, Some(Theme::Dark));

        let set = run(&mut accounts, ThemeAction::Set(Theme::Light)).unwrap();
        assert_eq!(set.theme, Some(Theme::Light));
    }
}
