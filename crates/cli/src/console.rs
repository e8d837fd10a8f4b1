//! Terminal presentation: prompts, confirmation, and effect printing.

use std::io::{self, Write};

use anyhow::Context;
use payroll_app::employees::{
    Action, Confirm, Effect, EmployeeApi, EmployeeId, Field, FormController, SyncEngine,
};

/// Yes/no confirmation read from stdin. End of input counts as "no".
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        match prompt(&format!("{message} [y/N]: ")) {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

/// Print `label` and read one line. `None` at end of input.
pub fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn parse_id(text: &str) -> Option<EmployeeId> {
    text.parse().ok()
}

/// Print everything except alerts; return the alert messages.
pub fn print_effects<A: EmployeeApi>(engine: &SyncEngine<A>, effects: &[Effect]) -> Vec<String> {
    let mut alerts = Vec::new();
    for effect in effects {
        match effect {
            Effect::Toast(message) => println!("{message}"),
            Effect::Alert(message) => alerts.push(message.clone()),
            Effect::Rendered { .. } => print!("{}", engine.view().to_text()),
            Effect::FormFilled(id) => println!("Loaded employee #{id} into the form."),
            Effect::Cancelled => println!("Cancelled."),
            Effect::FormReset => {}
        }
    }
    alerts
}

/// Prompt for every visible field. An empty answer keeps the current
/// value. Returns `false` if input ended midway.
fn edit_fields(form: &mut FormController) -> io::Result<bool> {
    println!("-- {} --", form.title());
    for field in Field::ALL {
        let current = form.field(field).to_string();
        let label = if current.is_empty() {
            format!("{}: ", field.label())
        } else {
            format!("{} [{}]: ", field.label(), current)
        };
        match prompt(&label)? {
            Some(answer) if answer.trim().is_empty() => {}
            Some(answer) => form.set_field(field, answer),
            None => return Ok(false),
        }
    }
    Ok(true)
}

fn print_menu(form: &FormController) {
    println!();
    println!("==== Employee Payroll ====");
    println!("Form: {}", form.title());
    println!("1. {} employee", form.submit_label());
    println!("2. Edit employee");
    println!("3. Delete employee");
    println!("4. Refresh");
    println!("5. Reset form");
    println!("6. Exit");
}

async fn step<A: EmployeeApi>(engine: &mut SyncEngine<A>, action: Action) -> bool {
    let effects = engine.dispatch(action, &mut StdinConfirm).await;
    let alerts = print_effects(engine, &effects);
    for message in &alerts {
        eprintln!("Error: {message}");
    }
    alerts.is_empty()
}

/// Menu-driven session. Runs until the user exits or input ends.
pub async fn run<A: EmployeeApi>(engine: &mut SyncEngine<A>) -> anyhow::Result<()> {
    step(engine, Action::Refresh).await;

    loop {
        print_menu(engine.form());
        let Some(choice) = prompt("Enter your choice: ").context("failed to read choice")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if edit_fields(engine.form_mut()).context("failed to read form input")? {
                    step(engine, Action::Submit).await;
                }
            }
            "2" => {
                let Some(id) = read_id()? else { continue };
                if step(engine, Action::Edit(id)).await
                    && edit_fields(engine.form_mut()).context("failed to read form input")?
                {
                    step(engine, Action::Submit).await;
                }
            }
            "3" => {
                let Some(id) = read_id()? else { continue };
                step(engine, Action::Delete(id)).await;
            }
            "4" => {
                step(engine, Action::Refresh).await;
            }
            "5" => {
                step(engine, Action::Reset).await;
                println!("Form cleared.");
            }
            "6" | "q" | "quit" | "exit" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn read_id() -> anyhow::Result<Option<EmployeeId>> {
    let Some(text) = prompt("Employee ID: ").context("failed to read employee id")? else {
        return Ok(None);
    };
    let id = parse_id(&text);
    if id.is_none() {
        println!("Please enter a valid employee ID.");
    }
    Ok(id)
}
