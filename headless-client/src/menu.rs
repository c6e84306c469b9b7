use clap::ValueEnum;
use common::debug_log;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MenuOption {
    HumanVsAi,
    NetworkBattle,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::HumanVsAi, MenuOption::NetworkBattle, MenuOption::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::HumanVsAi => "Human vs. AI",
            MenuOption::NetworkBattle => "Network Battle",
            MenuOption::Quit => "Quit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    StartDuel,
    /// Network play is not implemented.
    NetworkUnavailable,
    Quit,
}

pub const COMING_SOON: &str = "Coming Soon...";

#[derive(Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    pub fn move_up(&mut self) {
        self.selected = (self.selected + MenuOption::ALL.len() - 1) % MenuOption::ALL.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % MenuOption::ALL.len();
    }

    /// Walks the highlight down to `option`, the way a keyboard user would.
    pub fn navigate_to(&mut self, option: MenuOption) {
        while self.selected() != option {
            self.move_down();
        }
    }

    pub fn confirm(&self) -> MenuChoice {
        match self.selected() {
            MenuOption::HumanVsAi => MenuChoice::StartDuel,
            MenuOption::NetworkBattle => MenuChoice::NetworkUnavailable,
            MenuOption::Quit => MenuChoice::Quit,
        }
    }

    pub fn render(&self) -> String {
        MenuOption::ALL
            .iter()
            .map(|option| {
                let marker = if *option == self.selected() { ">" } else { " " };
                format!("{} {}", marker, option.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Visits the menu once per pick, as a user coming back to it after every duel would.
///
/// Stops after the first `Quit`; picks after it are never visited.
pub fn walk_menu(picks: &[MenuOption]) -> Vec<MenuChoice> {
    let mut choices = Vec::with_capacity(picks.len());
    for &pick in picks {
        let mut menu = MainMenu::new();
        menu.navigate_to(pick);
        debug_log!("Main menu:\n{}", menu.render());

        let choice = menu.confirm();
        choices.push(choice);
        if choice == MenuChoice::Quit {
            break;
        }
    }
    choices
}
