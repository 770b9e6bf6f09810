//! file: screen.rs
//! author: Jacob Xie
//! date: 2026/10/19 21:48:26 Monday
//! brief: the score tracking window

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Context, ElementId, FocusHandle, Focusable, FontWeight, KeyDownEvent, Window,
    actions, div, prelude::*, px, rgb, rgba,
};
use log::{debug, error};

use snake_ladder_score::{
    Effect, FileStore, KeyValueStore, Ladder, Notice, PendingUpdate, Snake, TeamSession, execute,
    format::format_score,
    game::{ChoiceKind, score_key},
};

const BACKGROUND: u32 = 0xf8f9fa;
const TEXT: u32 = 0x343a40;
const MUTED: u32 = 0x6c757d;
const BORDER: u32 = 0xced4da;
const INPUT_BG: u32 = 0xffffff;
const FOCUS: u32 = 0x007bff;
const BLUE: u32 = 0x007bff;
const GREEN: u32 = 0x28a745;
const YELLOW: u32 = 0xffc107;
const GREY: u32 = 0x6c757d;
const SELECTED: u32 = 0x343a40;
const OVERLAY: u32 = 0x02061799;

actions!(score_screen, [NextField, PrevField, Confirm, Cancel, Quit]);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Field {
    Team,
    InitialScore,
    Steps,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Team => "Enter Team Number:",
            Field::InitialScore => "Enter Initial Score:",
            Field::Steps => "Enter Steps to Move:",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Team => "Team Number",
            Field::InitialScore => "Initial Score",
            Field::Steps => "Number of Steps",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Field::Team => "team-field",
            Field::InitialScore => "initial-score-field",
            Field::Steps => "steps-field",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::Team => Field::InitialScore,
            Field::InitialScore => Field::Steps,
            Field::Steps => Field::Team,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Team => Field::Steps,
            Field::InitialScore => Field::Team,
            Field::Steps => Field::InitialScore,
        }
    }
}

struct Dialog {
    notice: Notice,
    pending: Option<PendingUpdate>,
}

pub struct ScoreScreen {
    session: TeamSession,
    store: Rc<FileStore>,
    team_input: String,
    initial_score_input: String,
    step_input: String,
    active: Field,
    dialog: Option<Dialog>,
    focus_handle: FocusHandle,
}

impl ScoreScreen {
    pub fn new(store: Rc<FileStore>, cx: &mut Context<Self>) -> Self {
        Self {
            session: TeamSession::new(),
            store,
            team_input: String::new(),
            initial_score_input: String::new(),
            step_input: String::new(),
            active: Field::Team,
            dialog: None,
            focus_handle: cx.focus_handle(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Team => &self.team_input,
            Field::InitialScore => &self.initial_score_input,
            Field::Steps => &self.step_input,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Team => &mut self.team_input,
            Field::InitialScore => &mut self.initial_score_input,
            Field::Steps => &mut self.step_input,
        }
    }

    fn focus_field(&mut self, field: Field, cx: &mut Context<Self>) {
        if self.dialog.is_none() {
            self.active = field;
            cx.notify();
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.dialog.is_some() {
            return;
        }
        let keystroke = &event.keystroke;
        let modifiers = &keystroke.modifiers;
        if modifiers.control || modifiers.platform || modifiers.alt {
            return;
        }

        let field = self.active;
        let edited = match keystroke.key.as_str() {
            "backspace" => self.value_mut(field).pop().is_some(),
            "tab" | "enter" | "escape" => false,
            _ => match keystroke.key_char.as_deref() {
                Some(typed) if typed.chars().all(is_field_char) => {
                    self.value_mut(field).push_str(typed);
                    true
                }
                _ => false,
            },
        };

        if edited {
            if field == Field::Team {
                self.team_changed(cx);
            }
            cx.notify();
        }
    }

    fn team_changed(&mut self, cx: &mut Context<Self>) {
        self.session.set_team(self.team_input.clone());
        if !self.team_input.is_empty() {
            self.load_team(cx);
        }
    }

    fn load_team(&mut self, cx: &mut Context<Self>) {
        let store = self.store.clone();
        let team = self.session.team().to_owned();
        cx.spawn(async move |this, cx| {
            let key = score_key(&team);
            let stored = match store.get_item(&key).await {
                Ok(stored) => stored,
                Err(err) => {
                    error!("failed to load {key}: {err}");
                    return;
                }
            };
            this.update(cx, |screen, cx| {
                if screen.session.team() != team {
                    debug!("dropping stale load for team {team:?}");
                    return;
                }
                screen.session.restore(stored.as_deref());
                cx.notify();
            })
            .ok();
        })
        .detach();
    }

    fn run_effects(&mut self, effects: Vec<Effect>, cx: &mut Context<Self>) {
        let (writes, notices): (Vec<_>, Vec<_>) = effects
            .into_iter()
            .partition(|effect| matches!(effect, Effect::Persist(_)));

        for effect in notices {
            if let Effect::Notify(notice) = effect {
                self.show(notice, None);
            }
        }

        if !writes.is_empty() {
            let store = self.store.clone();
            cx.spawn(async move |_, _| {
                if let Err(err) = execute(&*store, writes).await {
                    error!("failed to store score: {err}");
                }
            })
            .detach();
        }
        cx.notify();
    }

    fn show(&mut self, notice: Notice, pending: Option<PendingUpdate>) {
        self.dialog = Some(Dialog { notice, pending });
    }

    fn submit_team(&mut self, cx: &mut Context<Self>) {
        let notice = self.session.submit_team();
        self.show(notice, None);
        cx.notify();
    }

    fn start_game(&mut self, cx: &mut Context<Self>) {
        self.session.start_game(&self.initial_score_input);
        cx.notify();
    }

    fn step_clock(&mut self, cx: &mut Context<Self>) {
        let effects = self.session.step_clock(&self.step_input);
        self.run_effects(effects, cx);
    }

    fn update_score(&mut self, cx: &mut Context<Self>) {
        let pending = self.session.propose_update();
        self.show(pending.notice().clone(), Some(pending));
        cx.notify();
    }

    fn resolve_dialog(&mut self, kind: ChoiceKind, cx: &mut Context<Self>) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        match (kind, dialog.pending) {
            (ChoiceKind::Confirm, Some(pending)) => {
                let effects = self.session.confirm(pending);
                self.run_effects(effects, cx);
            }
            _ => cx.notify(),
        }
    }

    fn handle_confirm(&mut self, cx: &mut Context<Self>) {
        if let Some(dialog) = &self.dialog {
            let kind = if dialog.notice.needs_confirmation() {
                ChoiceKind::Confirm
            } else {
                ChoiceKind::Dismiss
            };
            self.resolve_dialog(kind, cx);
            return;
        }
        match self.active {
            Field::Team => self.submit_team(cx),
            Field::InitialScore => self.start_game(cx),
            Field::Steps => self.step_clock(cx),
        }
    }

    fn handle_cancel(&mut self, cx: &mut Context<Self>) {
        if self.dialog.is_some() {
            self.resolve_dialog(ChoiceKind::Cancel, cx);
        }
    }

    fn render_field(&self, field: Field, cx: &Context<Self>) -> impl IntoElement {
        let active = self.active == field && self.dialog.is_none();
        let value = self.value(field);
        let (shown, color) = if value.is_empty() {
            (field.placeholder().to_owned(), MUTED)
        } else if active {
            (format!("{value}|"), TEXT)
        } else {
            (value.to_owned(), TEXT)
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .child(field.label()),
            )
            .child(
                div()
                    .id(field.id())
                    .h(px(44.))
                    .px_3()
                    .flex()
                    .items_center()
                    .rounded_md()
                    .border_1()
                    .border_color(rgb(if active { FOCUS } else { BORDER }))
                    .bg(rgb(INPUT_BG))
                    .text_color(rgb(color))
                    .cursor_pointer()
                    .child(shown)
                    .on_click(
                        cx.listener(move |this, _: &ClickEvent, _, cx| this.focus_field(field, cx)),
                    ),
            )
    }

    fn render_snake_picker(&self, cx: &Context<Self>) -> impl IntoElement {
        let selected = self.session.selected_snake();
        let options = std::iter::once(None).chain(Snake::ALL.into_iter().map(Some));

        div()
            .flex()
            .flex_wrap()
            .gap_2()
            .children(options.enumerate().map(|(ix, snake)| {
                chip(
                    ElementId::Name(format!("snake-{ix}").into()),
                    snake.map_or("None", Snake::label),
                    snake == selected,
                    cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.session.select_snake(snake);
                        cx.notify();
                    }),
                )
            }))
    }

    fn render_ladder_picker(&self, cx: &Context<Self>) -> impl IntoElement {
        let selected = self.session.selected_ladder();
        let options = std::iter::once(None).chain(Ladder::ALL.into_iter().map(Some));

        div()
            .flex()
            .flex_wrap()
            .gap_2()
            .children(options.enumerate().map(|(ix, ladder)| {
                chip(
                    ElementId::Name(format!("ladder-{ix}").into()),
                    ladder.map_or("None", Ladder::label),
                    ladder == selected,
                    cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.session.select_ladder(ladder);
                        cx.notify();
                    }),
                )
            }))
    }

    fn render_dialog(&self, dialog: &Dialog, cx: &Context<Self>) -> impl IntoElement {
        let buttons = dialog.notice.choices.iter().enumerate().map(|(ix, choice)| {
            let kind = choice.kind;
            let color = match kind {
                ChoiceKind::Cancel => GREY,
                ChoiceKind::Dismiss | ChoiceKind::Confirm => BLUE,
            };
            button(
                ElementId::Name(format!("choice-{ix}").into()),
                choice.label,
                color,
                cx.listener(move |this, _: &ClickEvent, _, cx| this.resolve_dialog(kind, cx)),
            )
        });

        div()
            .absolute()
            .top(px(0.))
            .bottom(px(0.))
            .left(px(0.))
            .right(px(0.))
            .flex()
            .items_center()
            .justify_center()
            .bg(rgba(OVERLAY))
            .child(
                div()
                    .w(px(420.))
                    .p_5()
                    .gap_3()
                    .flex()
                    .flex_col()
                    .rounded_xl()
                    .bg(rgb(INPUT_BG))
                    .shadow_lg()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child(dialog.notice.title.clone()),
                    )
                    .children(
                        dialog
                            .notice
                            .message
                            .lines()
                            .map(|line| div().text_sm().child(line.to_owned())),
                    )
                    .child(div().flex().justify_end().gap_2().children(buttons)),
            )
    }
}

fn is_field_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "-+.".contains(ch)
}

fn button(
    id: impl Into<ElementId>,
    label: &'static str,
    color: u32,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(id)
        .px_4()
        .py_2()
        .rounded_md()
        .bg(rgb(color))
        .text_color(rgb(INPUT_BG))
        .font_weight(FontWeight::SEMIBOLD)
        .cursor_pointer()
        .child(label)
        .on_click(on_click)
}

fn chip(
    id: impl Into<ElementId>,
    label: &'static str,
    selected: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(id)
        .px_3()
        .py_1()
        .rounded_md()
        .border_1()
        .border_color(rgb(BORDER))
        .bg(rgb(if selected { SELECTED } else { INPUT_BG }))
        .text_color(rgb(if selected { INPUT_BG } else { TEXT }))
        .text_sm()
        .cursor_pointer()
        .child(label)
        .on_click(on_click)
}

impl Render for ScoreScreen {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selected = format!(
            "Selected Snake: {}, Selected Ladder: {}",
            self.session.selected_snake().map_or("None", Snake::label),
            self.session.selected_ladder().map_or("None", Ladder::label),
        );

        div()
            .bg(rgb(BACKGROUND))
            .text_color(rgb(TEXT))
            .size_full()
            .relative()
            .p_5()
            .gap_3()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("score-screen")
            .on_action(cx.listener(|this, _: &NextField, _, cx| {
                let next = this.active.next();
                this.focus_field(next, cx)
            }))
            .on_action(cx.listener(|this, _: &PrevField, _, cx| {
                let prev = this.active.prev();
                this.focus_field(prev, cx)
            }))
            .on_action(cx.listener(|this, _: &Confirm, _, cx| this.handle_confirm(cx)))
            .on_action(cx.listener(|this, _: &Cancel, _, cx| this.handle_cancel(cx)))
            .on_key_down(
                cx.listener(|this, event: &KeyDownEvent, _, cx| this.handle_key_down(event, cx)),
            )
            .child(self.render_field(Field::Team, cx))
            .child(button(
                "submit-team",
                "Submit Team Number",
                BLUE,
                cx.listener(|this, _: &ClickEvent, _, cx| this.submit_team(cx)),
            ))
            .child(self.render_field(Field::InitialScore, cx))
            .child(button(
                "start-game",
                "Start Game",
                GREEN,
                cx.listener(|this, _: &ClickEvent, _, cx| this.start_game(cx)),
            ))
            .child(div().text_color(rgb(MUTED)).child(selected))
            .child(self.render_field(Field::Steps, cx))
            .child(button(
                "step-clock",
                "Calculate Clock Score",
                GREEN,
                cx.listener(|this, _: &ClickEvent, _, cx| this.step_clock(cx)),
            ))
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(GREEN))
                    .child(format!(
                        "Current Clock Position: {}",
                        self.session.clock().displayed()
                    )),
            )
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .child(format!(
                        "Current Score: {}",
                        format_score(self.session.score())
                    )),
            )
            .child(div().font_weight(FontWeight::BOLD).child("Select Snake:"))
            .child(self.render_snake_picker(cx))
            .child(div().font_weight(FontWeight::BOLD).child("Select Ladder:"))
            .child(self.render_ladder_picker(cx))
            .child(button(
                "update-score",
                "Update Snake and Ladder Score",
                YELLOW,
                cx.listener(|this, _: &ClickEvent, _, cx| this.update_score(cx)),
            ))
            .when_some(self.dialog.as_ref(), |this, dialog| {
                this.child(self.render_dialog(dialog, cx))
            })
    }
}

impl Focusable for ScoreScreen {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
