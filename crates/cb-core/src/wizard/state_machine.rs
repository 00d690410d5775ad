//! Settings wizard state machine.
//!
//! Pure transition function: `(state, record, event) -> (state, actions)`.
//! The machine mutates the in-memory settings record and asks the caller to
//! persist and render through [`WizardAction`]s; it never touches storage or
//! the transport itself. Unmatched pairs leave the state unchanged and
//! produce no effects.

use tracing::warn;

use crate::settings::input::{parse_removal_list, parse_replace_pairs};
use crate::settings::model::{LinkButton, RemovalMatch, Settings};

use super::action::WizardAction;
use super::event::{EditField, ToggleSwitch, WizardEvent};
use super::messages;
use super::state::{MenuPage, WizardState};

pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: WizardState,
        settings: &mut Settings,
        event: WizardEvent,
    ) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            // ===== Navigation =====
            (WizardState::Menu(_), WizardEvent::Navigate { page }) => (
                WizardState::Menu(page),
                vec![WizardAction::RenderMenu { page, notice: None }],
            ),

            // ===== Style toggles =====
            (WizardState::Menu(page), WizardEvent::ToggleStyle { tag }) => {
                let notice = match tag.as_style() {
                    Some(style) => {
                        let now_on = settings.styles.toggle(style);
                        messages::style_toggled(style, now_on)
                    }
                    None => {
                        settings.styles.clear();
                        messages::STYLE_CLEARED.to_string()
                    }
                };
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(notice),
                        },
                    ],
                )
            }

            // ===== Cleanup switches =====
            (WizardState::Menu(page), WizardEvent::ToggleSwitch { switch }) => {
                let notice = match switch {
                    ToggleSwitch::AutoRemoveLinks => {
                        settings.auto_remove_links = !settings.auto_remove_links;
                        messages::switch_toggled("Auto remove links", settings.auto_remove_links)
                    }
                    ToggleSwitch::AutoRemoveUsernames => {
                        settings.auto_remove_usernames = !settings.auto_remove_usernames;
                        messages::switch_toggled(
                            "Auto remove usernames",
                            settings.auto_remove_usernames,
                        )
                    }
                    ToggleSwitch::AutoRemoveExtensionTail => {
                        settings.auto_remove_extension_tail = !settings.auto_remove_extension_tail;
                        messages::switch_toggled(
                            "Auto remove extension tails",
                            settings.auto_remove_extension_tail,
                        )
                    }
                    ToggleSwitch::RemovalMatch => {
                        settings.removal_match = match settings.removal_match {
                            RemovalMatch::Substring => RemovalMatch::WholeWord,
                            RemovalMatch::WholeWord => RemovalMatch::Substring,
                        };
                        messages::removal_match_switched(
                            settings.removal_match == RemovalMatch::WholeWord,
                        )
                    }
                };
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(notice),
                        },
                    ],
                )
            }

            // ===== Modal editors =====
            (WizardState::Menu(_), WizardEvent::RequestEdit { field }) => {
                let next = match field {
                    EditField::Prefix => WizardState::AwaitPrefix,
                    EditField::Suffix => WizardState::AwaitSuffix,
                    EditField::Mention => WizardState::AwaitMention,
                    EditField::Link => WizardState::AwaitLink,
                    EditField::Replacements => WizardState::AwaitReplacements,
                    EditField::Removals => WizardState::AwaitRemovals,
                    EditField::Button => WizardState::AwaitButtonText,
                    EditField::DumpChannel => WizardState::AwaitDumpForward,
                };
                (
                    next,
                    vec![WizardAction::Prompt {
                        text: messages::prompt_for(field).to_string(),
                    }],
                )
            }

            (WizardState::AwaitPrefix, WizardEvent::TextInput { text }) => {
                settings.prefix = text.trim().to_string();
                field_saved(EditField::Prefix)
            }
            (WizardState::AwaitSuffix, WizardEvent::TextInput { text }) => {
                settings.suffix = text.trim().to_string();
                field_saved(EditField::Suffix)
            }
            (WizardState::AwaitMention, WizardEvent::TextInput { text }) => {
                settings.mention_text = text.trim().to_string();
                field_saved(EditField::Mention)
            }
            (WizardState::AwaitLink, WizardEvent::TextInput { text }) => {
                let url = text.trim();
                settings.link_wrap_url = (!url.is_empty()).then(|| url.to_string());
                field_saved(EditField::Link)
            }
            (WizardState::AwaitReplacements, WizardEvent::TextInput { text }) => {
                settings.replacements = parse_replace_pairs(&text);
                let page = MenuPage::Page2;
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(messages::replacements_saved(settings.replacements.len())),
                        },
                    ],
                )
            }
            (WizardState::AwaitRemovals, WizardEvent::TextInput { text }) => {
                settings.removals = parse_removal_list(&text);
                let page = MenuPage::Page2;
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(messages::removals_saved(settings.removals.len())),
                        },
                    ],
                )
            }

            // ===== Button capture, two steps =====
            (WizardState::AwaitButtonText, WizardEvent::TextInput { text }) => {
                let label = text.trim();
                let label = if label.is_empty() {
                    DEFAULT_BUTTON_LABEL
                } else {
                    label
                };
                (
                    WizardState::AwaitButtonUrl {
                        label: label.to_string(),
                    },
                    vec![WizardAction::Prompt {
                        text: messages::PROMPT_BUTTON_URL.to_string(),
                    }],
                )
            }
            (WizardState::AwaitButtonUrl { label }, WizardEvent::TextInput { text }) => {
                let url = text.trim();
                settings.button = (!url.is_empty()).then(|| LinkButton {
                    label,
                    url: url.to_string(),
                });
                field_saved(EditField::Button)
            }

            // ===== Dump channel capture =====
            (WizardState::AwaitDumpForward, WizardEvent::ChannelForward { channel, title }) => {
                settings.dump_channel_id = Some(channel);
                let page = MenuPage::Page3;
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(messages::dump_channel_set(&title)),
                        },
                    ],
                )
            }
            (state @ WizardState::AwaitDumpForward, WizardEvent::TextInput { .. }) => (
                state,
                vec![WizardAction::Notice {
                    text: messages::DUMP_FORWARD_HINT.to_string(),
                }],
            ),

            // ===== Field clears =====
            (WizardState::Menu(page), WizardEvent::ClearField { field }) => {
                field.apply(settings);
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(messages::field_cleared(field).to_string()),
                        },
                    ],
                )
            }

            // ===== Clear-all confirmation =====
            (WizardState::Menu(_), WizardEvent::RequestClearAll) => (
                WizardState::ConfirmClearAll,
                vec![WizardAction::RenderConfirmClearAll],
            ),
            (WizardState::ConfirmClearAll, WizardEvent::ConfirmClearAll) => {
                *settings = Settings::default();
                let page = MenuPage::Page3;
                (
                    WizardState::Menu(page),
                    vec![
                        WizardAction::Persist,
                        WizardAction::RenderMenu {
                            page,
                            notice: Some(messages::CLEAR_ALL_DONE.to_string()),
                        },
                    ],
                )
            }
            (WizardState::ConfirmClearAll, WizardEvent::CancelClearAll) => {
                let page = MenuPage::Page3;
                (
                    WizardState::Menu(page),
                    vec![WizardAction::RenderMenu {
                        page,
                        notice: Some(messages::CLEAR_ALL_CANCELLED.to_string()),
                    }],
                )
            }

            // ===== Preview and exit =====
            (state @ WizardState::Menu(_), WizardEvent::Preview) => {
                (state, vec![WizardAction::ShowPreview])
            }
            (WizardState::Menu(_), WizardEvent::Done) => (
                WizardState::Done,
                vec![
                    WizardAction::Persist,
                    WizardAction::Close {
                        notice: messages::SETTINGS_SAVED.to_string(),
                    },
                ],
            ),
            (state, WizardEvent::Cancel) if state.is_modal() => (
                WizardState::Done,
                vec![WizardAction::Close {
                    notice: messages::MENU_CLOSED.to_string(),
                }],
            ),

            // ===== Terminal state: swallow everything =====
            (state @ WizardState::Done, _) => (state, vec![]),

            // ===== Invalid transitions: no state change, no effects =====
            (state, event) => {
                warn!(?state, ?event, "invalid wizard transition");
                (state, vec![])
            }
        }
    }
}

/// Completion of a single-step modal edit: back to the field's menu page.
fn field_saved(field: EditField) -> (WizardState, Vec<WizardAction>) {
    let page = field.return_page();
    (
        WizardState::Menu(page),
        vec![
            WizardAction::Persist,
            WizardAction::RenderMenu {
                page,
                notice: Some(messages::field_updated(field).to_string()),
            },
        ],
    )
}

const DEFAULT_BUTTON_LABEL: &str = "Visit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ChatId;
    use crate::settings::model::CaptionStyle;
    use crate::wizard::event::{ClearField, StyleTag};

    fn render(page: MenuPage, notice: Option<String>) -> WizardAction {
        WizardAction::RenderMenu { page, notice }
    }

    #[allow(clippy::type_complexity)]
    fn cases() -> Vec<(
        &'static str,
        WizardState,
        WizardEvent,
        WizardState,
        Vec<WizardAction>,
    )> {
        vec![
            (
                "navigate switches pages without persisting",
                WizardState::Menu(MenuPage::Page1),
                WizardEvent::Navigate {
                    page: MenuPage::Page2,
                },
                WizardState::Menu(MenuPage::Page2),
                vec![render(MenuPage::Page2, None)],
            ),
            (
                "style toggle persists and rerenders",
                WizardState::Menu(MenuPage::Page1),
                WizardEvent::ToggleStyle {
                    tag: StyleTag::Bold,
                },
                WizardState::Menu(MenuPage::Page1),
                vec![
                    WizardAction::Persist,
                    render(
                        MenuPage::Page1,
                        Some(messages::style_toggled(CaptionStyle::Bold, true)),
                    ),
                ],
            ),
            (
                "style none clears the whole set",
                WizardState::Menu(MenuPage::Page1),
                WizardEvent::ToggleStyle {
                    tag: StyleTag::None,
                },
                WizardState::Menu(MenuPage::Page1),
                vec![
                    WizardAction::Persist,
                    render(MenuPage::Page1, Some(messages::STYLE_CLEARED.to_string())),
                ],
            ),
            (
                "request edit opens the modal prompt",
                WizardState::Menu(MenuPage::Page3),
                WizardEvent::RequestEdit {
                    field: EditField::Prefix,
                },
                WizardState::AwaitPrefix,
                vec![WizardAction::Prompt {
                    text: messages::PROMPT_PREFIX.to_string(),
                }],
            ),
            (
                "prefix input returns to page three",
                WizardState::AwaitPrefix,
                WizardEvent::TextInput {
                    text: "[HD]".to_string(),
                },
                WizardState::Menu(MenuPage::Page3),
                vec![
                    WizardAction::Persist,
                    render(
                        MenuPage::Page3,
                        Some(messages::field_updated(EditField::Prefix).to_string()),
                    ),
                ],
            ),
            (
                "replacement input returns to page two",
                WizardState::AwaitReplacements,
                WizardEvent::TextInput {
                    text: "a - b".to_string(),
                },
                WizardState::Menu(MenuPage::Page2),
                vec![
                    WizardAction::Persist,
                    render(MenuPage::Page2, Some(messages::replacements_saved(1))),
                ],
            ),
            (
                "button label leads to url capture",
                WizardState::AwaitButtonText,
                WizardEvent::TextInput {
                    text: "Visit us".to_string(),
                },
                WizardState::AwaitButtonUrl {
                    label: "Visit us".to_string(),
                },
                vec![WizardAction::Prompt {
                    text: messages::PROMPT_BUTTON_URL.to_string(),
                }],
            ),
            (
                "button url completes the capture",
                WizardState::AwaitButtonUrl {
                    label: "Visit us".to_string(),
                },
                WizardEvent::TextInput {
                    text: "https://example.com".to_string(),
                },
                WizardState::Menu(MenuPage::Page3),
                vec![
                    WizardAction::Persist,
                    render(
                        MenuPage::Page3,
                        Some(messages::field_updated(EditField::Button).to_string()),
                    ),
                ],
            ),
            (
                "clear all asks for confirmation first",
                WizardState::Menu(MenuPage::Page3),
                WizardEvent::RequestClearAll,
                WizardState::ConfirmClearAll,
                vec![WizardAction::RenderConfirmClearAll],
            ),
            (
                "confirmed clear all resets and rerenders",
                WizardState::ConfirmClearAll,
                WizardEvent::ConfirmClearAll,
                WizardState::Menu(MenuPage::Page3),
                vec![
                    WizardAction::Persist,
                    render(
                        MenuPage::Page3,
                        Some(messages::CLEAR_ALL_DONE.to_string()),
                    ),
                ],
            ),
            (
                "cancelled clear all keeps the record",
                WizardState::ConfirmClearAll,
                WizardEvent::CancelClearAll,
                WizardState::Menu(MenuPage::Page3),
                vec![render(
                    MenuPage::Page3,
                    Some(messages::CLEAR_ALL_CANCELLED.to_string()),
                )],
            ),
            (
                "cancel aborts a modal edit without persisting",
                WizardState::AwaitLink,
                WizardEvent::Cancel,
                WizardState::Done,
                vec![WizardAction::Close {
                    notice: messages::MENU_CLOSED.to_string(),
                }],
            ),
            (
                "done closes the menu",
                WizardState::Menu(MenuPage::Page2),
                WizardEvent::Done,
                WizardState::Done,
                vec![
                    WizardAction::Persist,
                    WizardAction::Close {
                        notice: messages::SETTINGS_SAVED.to_string(),
                    },
                ],
            ),
            (
                "channel forward registers the dump channel",
                WizardState::AwaitDumpForward,
                WizardEvent::ChannelForward {
                    channel: ChatId::new(-1001),
                    title: "My Channel".to_string(),
                },
                WizardState::Menu(MenuPage::Page3),
                vec![
                    WizardAction::Persist,
                    render(
                        MenuPage::Page3,
                        Some(messages::dump_channel_set("My Channel")),
                    ),
                ],
            ),
            (
                "plain text during dump capture only hints",
                WizardState::AwaitDumpForward,
                WizardEvent::TextInput {
                    text: "hello".to_string(),
                },
                WizardState::AwaitDumpForward,
                vec![WizardAction::Notice {
                    text: messages::DUMP_FORWARD_HINT.to_string(),
                }],
            ),
            (
                "preview renders without persisting",
                WizardState::Menu(MenuPage::Page1),
                WizardEvent::Preview,
                WizardState::Menu(MenuPage::Page1),
                vec![WizardAction::ShowPreview],
            ),
            (
                "done state swallows further events",
                WizardState::Done,
                WizardEvent::Navigate {
                    page: MenuPage::Page1,
                },
                WizardState::Done,
                vec![],
            ),
        ]
    }

    #[test]
    fn wizard_state_machine_table_driven() {
        for (name, state, event, expected_state, expected_actions) in cases() {
            let mut settings = Settings::default();
            let (next, actions) = WizardStateMachine::transition(state, &mut settings, event);
            assert_eq!(next, expected_state, "state mismatch: {}", name);
            assert_eq!(actions, expected_actions, "actions mismatch: {}", name);
        }
    }

    #[test]
    fn invalid_transition_is_noop() {
        let mut settings = Settings::default();
        let (next, actions) = WizardStateMachine::transition(
            WizardState::Menu(MenuPage::Page1),
            &mut settings,
            WizardEvent::TextInput {
                text: "stray".to_string(),
            },
        );
        assert_eq!(next, WizardState::Menu(MenuPage::Page1));
        assert!(actions.is_empty());
        assert_eq!(settings, Settings::default());

        let (next, actions) = WizardStateMachine::transition(
            WizardState::AwaitPrefix,
            &mut settings,
            WizardEvent::Navigate {
                page: MenuPage::Page2,
            },
        );
        assert_eq!(next, WizardState::AwaitPrefix);
        assert!(actions.is_empty());
    }

    #[test]
    fn text_input_is_trimmed_before_storing() {
        let mut settings = Settings::default();
        WizardStateMachine::transition(
            WizardState::AwaitPrefix,
            &mut settings,
            WizardEvent::TextInput {
                text: "  [HD]  ".to_string(),
            },
        );
        assert_eq!(settings.prefix, "[HD]");
    }

    #[test]
    fn empty_link_input_stores_none() {
        let mut settings = Settings::default();
        settings.link_wrap_url = Some("https://old".to_string());
        WizardStateMachine::transition(
            WizardState::AwaitLink,
            &mut settings,
            WizardEvent::TextInput {
                text: "   ".to_string(),
            },
        );
        assert_eq!(settings.link_wrap_url, None);
    }

    #[test]
    fn empty_button_label_falls_back_to_default() {
        let mut settings = Settings::default();
        let (next, _) = WizardStateMachine::transition(
            WizardState::AwaitButtonText,
            &mut settings,
            WizardEvent::TextInput {
                text: "  ".to_string(),
            },
        );
        assert_eq!(
            next,
            WizardState::AwaitButtonUrl {
                label: "Visit".to_string()
            }
        );
    }

    #[test]
    fn empty_button_url_stores_no_button() {
        let mut settings = Settings::default();
        WizardStateMachine::transition(
            WizardState::AwaitButtonUrl {
                label: "Visit".to_string(),
            },
            &mut settings,
            WizardEvent::TextInput {
                text: " ".to_string(),
            },
        );
        assert_eq!(settings.button, None);
    }

    #[test]
    fn toggle_switch_flips_the_flag() {
        let mut settings = Settings::default();
        WizardStateMachine::transition(
            WizardState::Menu(MenuPage::Page2),
            &mut settings,
            WizardEvent::ToggleSwitch {
                switch: ToggleSwitch::AutoRemoveLinks,
            },
        );
        assert!(settings.auto_remove_links);
    }

    #[test]
    fn removal_match_toggle_roundtrips() {
        let mut settings = Settings::default();
        let toggle = || WizardEvent::ToggleSwitch {
            switch: ToggleSwitch::RemovalMatch,
        };
        WizardStateMachine::transition(
            WizardState::Menu(MenuPage::Page2),
            &mut settings,
            toggle(),
        );
        assert_eq!(settings.removal_match, RemovalMatch::WholeWord);
        WizardStateMachine::transition(
            WizardState::Menu(MenuPage::Page2),
            &mut settings,
            toggle(),
        );
        assert_eq!(settings.removal_match, RemovalMatch::Substring);
    }

    #[test]
    fn clear_field_resets_only_that_field() {
        let mut settings = Settings::default();
        settings.prefix = "[HD]".to_string();
        settings.suffix = "S2".to_string();
        WizardStateMachine::transition(
            WizardState::Menu(MenuPage::Page3),
            &mut settings,
            WizardEvent::ClearField {
                field: ClearField::Prefix,
            },
        );
        assert_eq!(settings.prefix, "");
        assert_eq!(settings.suffix, "S2");
    }

    #[test]
    fn confirmed_clear_all_resets_the_whole_record() {
        let mut settings = Settings::default();
        settings.prefix = "[HD]".to_string();
        settings.styles.toggle(CaptionStyle::Bold);
        settings.dump_channel_id = Some(ChatId::new(-1001));
        WizardStateMachine::transition(
            WizardState::ConfirmClearAll,
            &mut settings,
            WizardEvent::ConfirmClearAll,
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn cancel_discards_the_pending_edit() {
        let mut settings = Settings::default();
        settings.prefix = "[HD]".to_string();
        let (_, actions) = WizardStateMachine::transition(
            WizardState::AwaitSuffix,
            &mut settings,
            WizardEvent::Cancel,
        );
        assert!(!actions.contains(&WizardAction::Persist));
        assert_eq!(settings.prefix, "[HD]");
    }
}
