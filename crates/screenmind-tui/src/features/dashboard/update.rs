//! Home screen key handling (tab navigation).

use crossterm::event::{KeyCode, KeyEvent};
use screenmind_core::dashboard::Tab;

use crate::effects::UiEffect;
use crate::navigation::Navigator;

pub fn handle_key(nav: &mut Navigator, key: KeyEvent) -> Vec<UiEffect> {
    let Some(active) = nav.active_tab() else {
        return vec![];
    };

    let target = match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(active.next()),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(active.prev()),
        KeyCode::Char(c @ '1'..='4') => c
            .to_digit(10)
            .and_then(|d| Tab::from_index(d as usize - 1)),
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Esc | KeyCode::Backspace => {
            if !nav.back() {
                tracing::debug!("back ignored, no previous screen");
            }
            None
        }
        _ => None,
    };

    if let Some(tab) = target
        && tab != active
    {
        nav.select_tab(tab);
        tracing::debug!(tab = tab.route_name(), "tab selected");
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::navigation::Route;

    fn home(tab: Tab) -> Navigator {
        let mut nav = Navigator::new();
        nav.replace(Route::Home { tab });
        nav
    }

    fn press(nav: &mut Navigator, code: KeyCode) -> Vec<UiEffect> {
        handle_key(nav, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrows_wrap_around() {
        let mut nav = home(Tab::Usage);
        press(&mut nav, KeyCode::Left);
        assert_eq!(nav.active_tab(), Some(Tab::Isolation));
        press(&mut nav, KeyCode::Right);
        assert_eq!(nav.active_tab(), Some(Tab::Usage));
    }

    #[test]
    fn test_digits_select_tab() {
        let mut nav = home(Tab::Usage);
        press(&mut nav, KeyCode::Char('3'));
        assert_eq!(nav.active_tab(), Some(Tab::Social));
        press(&mut nav, KeyCode::Char('4'));
        assert_eq!(nav.active_tab(), Some(Tab::Isolation));
    }

    #[test]
    fn test_back_does_not_return_to_login() {
        let mut nav = home(Tab::Sleep);
        press(&mut nav, KeyCode::Esc);
        assert_eq!(nav.current(), Route::Home { tab: Tab::Sleep });
    }

    #[test]
    fn test_q_quits() {
        let mut nav = home(Tab::Usage);
        let effects = press(&mut nav, KeyCode::Char('q'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }
}
