mod console;

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use payroll_app::employees::{
    Action, Confirm, Employee, EmployeeApi, EmployeeId, Field, FormController, RemoteEmployeeApi,
    SyncEngine,
};
use payroll_app::utils::format_amount;
use payroll_http::HttpClient;
use payroll_kernel::settings::Settings;

use console::StdinConfirm;

#[derive(Debug, Parser)]
#[command(name = "payroll", version, about = "Manage employee payroll records")]
struct Cli {
    /// Server origin, overriding `api.base_url` from configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the employee table
    List {
        /// Print `<tbody>` markup instead of a text table
        #[arg(long)]
        html: bool,
    },
    /// Print one employee
    Show { id: EmployeeId },
    /// Create an employee
    Add(RecordArgs),
    /// Replace an employee; omitted fields keep their current values
    Update {
        id: EmployeeId,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Delete an employee after confirmation
    Delete {
        id: EmployeeId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Menu-driven session (the default)
    Interactive,
}

#[derive(Debug, Args)]
struct RecordArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    designation: Option<String>,
    #[arg(long)]
    basic_salary: Option<String>,
    #[arg(long)]
    hra: Option<String>,
    #[arg(long)]
    da: Option<String>,
    #[arg(long)]
    deductions: Option<String>,
}

impl RecordArgs {
    /// Copy the given values into the form; absent ones are left as is.
    fn apply(self, form: &mut FormController) {
        let values = [
            (Field::Name, self.name),
            (Field::Designation, self.designation),
            (Field::BasicSalary, self.basic_salary),
            (Field::Hra, self.hra),
            (Field::Da, self.da),
            (Field::Deductions, self.deductions),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
    }
}

/// Auto-confirms; used for `delete --yes`.
struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load payroll settings")?;
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }

    payroll_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        endpoint = %settings.api.endpoint(),
        "payroll client starting"
    );

    let client = HttpClient::new(settings.api.endpoint(), settings.api.request_timeout())
        .with_context(|| "failed to build HTTP client")?;
    let mut engine = SyncEngine::new(RemoteEmployeeApi::new(client));

    match cli.command.unwrap_or(Command::Interactive) {
        Command::List { html } => {
            let view = engine
                .load_employees()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            if html {
                println!("{}", view.to_html());
            } else {
                print!("{}", view.to_text());
            }
        }
        Command::Show { id } => {
            let employee = engine
                .api()
                .get_employee(id)
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print_employee(&employee);
        }
        Command::Add(fields) => {
            fields.apply(engine.form_mut());
            run_action(&mut engine, Action::Submit, &mut StdinConfirm).await?;
        }
        Command::Update { id, fields } => {
            run_action(&mut engine, Action::Edit(id), &mut StdinConfirm).await?;
            fields.apply(engine.form_mut());
            run_action(&mut engine, Action::Submit, &mut StdinConfirm).await?;
        }
        Command::Delete { id, yes } => {
            if yes {
                run_action(&mut engine, Action::Delete(id), &mut AssumeYes).await?;
            } else {
                run_action(&mut engine, Action::Delete(id), &mut StdinConfirm).await?;
            }
        }
        Command::Interactive => console::run(&mut engine).await?,
    }

    Ok(())
}

/// Dispatch one action; the first alert becomes the command's error.
async fn run_action<A: EmployeeApi>(
    engine: &mut SyncEngine<A>,
    action: Action,
    confirm: &mut dyn Confirm,
) -> anyhow::Result<()> {
    let effects = engine.dispatch(action, confirm).await;
    let alerts = console::print_effects(engine, &effects);
    match alerts.into_iter().next() {
        Some(message) => Err(anyhow!(message)),
        None => Ok(()),
    }
}

fn print_employee(employee: &Employee) {
    let EmployeeId(id) = employee.id;
    println!("ID:           {}", id);
    println!("Name:         {}", employee.name);
    println!("Designation:  {}", employee.designation);
    println!("Basic Salary: {}", format_amount(employee.basic_salary));
    println!("HRA:          {}", format_amount(employee.hra));
    println!("DA:           {}", format_amount(employee.da));
    println!("Deductions:   {}", format_amount(employee.deductions));
    println!("Gross Salary: {}", format_amount(employee.gross_salary));
    println!("Net Salary:   {}", format_amount(employee.net_salary));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["payroll"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn update_takes_partial_fields() {
        let cli = Cli::try_parse_from([
            "payroll",
            "update",
            "7",
            "--hra",
            "900",
            "--base-url",
            "http://x:1",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://x:1"));
        let Some(Command::Update { id, fields }) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(id, EmployeeId(7));

        let mut form = FormController::new();
        form.set_field(Field::Name, "Asha");
        fields.apply(&mut form);
        assert_eq!(form.field(Field::Name), "Asha");
        assert_eq!(form.field(Field::Hra), "900");
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["payroll", "delete", "seven"]).is_err());
    }

    #[test]
    fn add_accepts_values_without_validation() {
        let cli =
            Cli::try_parse_from(["payroll", "add", "--name", "Asha", "--basic-salary", "lots"])
                .unwrap();
        let Some(Command::Add(fields)) = cli.command else {
            panic!("expected add");
        };
        let mut form = FormController::new();
        fields.apply(&mut form);
        assert_eq!(form.read_form().basic_salary, "lots");
        assert_eq!(form.read_form().designation, "");
    }
}
