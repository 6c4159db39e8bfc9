use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use jobsmith_core::{update, AppState, Msg, Screen, Skill};
use jobsmith_engine::EngineConfig;

use crate::effects::EffectRunner;
use crate::render;

/// One step of the main loop: either a parsed user command or an engine
/// completion joining the same stream.
enum Event {
    Command(Command),
    Msg(Msg),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Job(String),
    Toggle(String),
    Search(String),
    Add { name: String, id: String },
    Delete(String),
    Screen(Screen),
    Help,
    Quit,
    Unknown(String),
}

pub fn run() -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<Event>();
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx, EngineConfig::from_env())?;

    // Engine completions are forwarded into the event stream so the loop
    // below stays the only place state is touched.
    {
        let event_tx = event_tx.clone();
        thread::spawn(move || {
            while let Ok(msg) = msg_rx.recv() {
                if event_tx.send(Event::Msg(msg)).is_err() {
                    break;
                }
            }
        });
    }

    spawn_stdin_reader(event_tx);

    println!("{}", help_text());
    let mut state = AppState::new();
    while let Ok(event) = event_rx.recv() {
        match event {
            Event::Command(Command::Quit) => break,
            Event::Command(Command::Help) => println!("{}", help_text()),
            Event::Command(Command::Unknown(line)) => {
                println!("Unknown command: {line} (try `help`)");
            }
            Event::Command(command) => {
                for msg in messages_for(command, &state) {
                    state = dispatch(state, msg, &runner);
                }
            }
            Event::Msg(msg) => state = dispatch(state, msg, &runner),
        }
        if state.consume_dirty() {
            println!("{}", render::render(&state.view()));
        }
    }
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

/// Expands a user command into the messages it stands for. Commands that
/// belong to a screen navigate there first; the update function discards
/// the departed screen's state, as on unmount.
fn messages_for(command: Command, state: &AppState) -> Vec<Msg> {
    match command {
        Command::Job(title) => vec![
            Msg::ScreenSelected(Screen::Job),
            Msg::JobInputChanged(title),
            Msg::GenerateClicked,
        ],
        Command::Toggle(id) => {
            let known = state
                .view()
                .job
                .skills
                .iter()
                .find(|skill| skill.id == id)
                .map(|skill| Skill {
                    id: skill.id.clone(),
                    name: skill.name.clone(),
                    distance: None,
                });
            match known {
                Some(skill) => vec![Msg::SkillToggled(skill)],
                None => {
                    println!("No recommended skill with id {id}");
                    Vec::new()
                }
            }
        }
        Command::Search(term) => vec![
            Msg::ScreenSelected(Screen::Skills),
            Msg::SearchInputChanged(term),
            Msg::SearchClicked,
        ],
        Command::Add { name, id } => vec![
            Msg::ScreenSelected(Screen::Skills),
            Msg::NewSkillNameChanged(name),
            Msg::NewSkillIdChanged(id),
            Msg::AddSkillClicked,
        ],
        Command::Delete(id) => vec![
            Msg::ScreenSelected(Screen::Skills),
            Msg::DeleteSkillClicked { skill_id: id },
        ],
        Command::Screen(screen) => vec![Msg::ScreenSelected(screen)],
        Command::Help | Command::Quit | Command::Unknown(_) => Vec::new(),
    }
}

fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Command::Unknown(line.to_string());
    };
    let rest: Vec<&str> = tokens.collect();
    match head {
        "job" => Command::Job(rest.join(" ")),
        "toggle" => match rest.as_slice() {
            [id] => Command::Toggle((*id).to_string()),
            _ => Command::Unknown(line.to_string()),
        },
        "search" => Command::Search(rest.join(" ")),
        // `add <name...> <id>`: the last token is the id; a single token
        // is a name with no id, which the original UI also allowed.
        "add" => match rest.as_slice() {
            [] => Command::Unknown(line.to_string()),
            [name] => Command::Add {
                name: (*name).to_string(),
                id: String::new(),
            },
            [name @ .., id] => Command::Add {
                name: name.join(" "),
                id: (*id).to_string(),
            },
        },
        "delete" => match rest.as_slice() {
            [id] => Command::Delete((*id).to_string()),
            _ => Command::Unknown(line.to_string()),
        },
        "screen" => match rest.as_slice() {
            ["job"] => Command::Screen(Screen::Job),
            ["skills"] => Command::Screen(Screen::Skills),
            _ => Command::Unknown(line.to_string()),
        },
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            if event_tx.send(Event::Command(parse_command(&line))).is_err() {
                break;
            }
        }
        // stdin closed; shut the loop down.
        let _ = event_tx.send(Event::Command(Command::Quit));
    });
}

fn help_text() -> &'static str {
    "Commands:\n\
     \x20 job <title>        generate a job description\n\
     \x20 toggle <skill_id>  select/deselect a recommended skill\n\
     \x20 search <term>      search the skill store\n\
     \x20 add <name> <id>    add a named skill\n\
     \x20 delete <skill_id>  delete a skill\n\
     \x20 screen job|skills  switch screens\n\
     \x20 help               show this text\n\
     \x20 quit               exit"
}
