//! Collection sync engine.
//!
//! Owns the form and the last rendered table. Every successful write is
//! followed by a full reload; the local collection is never patched.

use payroll_http::ApiResult;

use super::action::{Action, Confirm, Effect};
use super::api::EmployeeApi;
use super::form::FormController;
use super::models::{Employee, EmployeeId};
use super::view::{render_rows, TableView};

/// Which write a successful submit performed. A create carries the new id
/// only when the server echoed the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Created(Option<EmployeeId>),
    Updated(EmployeeId),
}

impl Saved {
    pub fn id(&self) -> Option<EmployeeId> {
        match self {
            Saved::Created(id) => *id,
            Saved::Updated(id) => Some(*id),
        }
    }

    fn notice(&self) -> &'static str {
        match self {
            Saved::Created(_) => "Employee added",
            Saved::Updated(_) => "Employee updated",
        }
    }
}

pub struct SyncEngine<A> {
    api: A,
    form: FormController,
    records: Vec<Employee>,
    view: TableView,
}

impl<A: EmployeeApi> SyncEngine<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            form: FormController::new(),
            records: Vec::new(),
            view: TableView::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Records behind the current view, in server order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Fetch the whole collection and replace the view. On failure the
    /// previous view is kept.
    pub async fn load_employees(&mut self) -> ApiResult<&TableView> {
        let employees = self.api.list_employees().await.inspect_err(|e| {
            tracing::warn!(error = %e, "employee reload failed; keeping previous table");
        })?;

        self.view = render_rows(&employees);
        self.records = employees;
        tracing::debug!(rows = self.view.len(), "employee table rendered");
        Ok(&self.view)
    }

    /// Send the form as a create or update, chosen by its identity. Any 2xx
    /// counts as success whatever its body. Resets the form on success and
    /// leaves it untouched on failure. Does not reload.
    pub async fn save(&mut self) -> ApiResult<Saved> {
        let input = self.form.read_form();

        let saved = match input.id {
            Some(id) => {
                self.api.update_employee(id, &input).await?;
                Saved::Updated(id)
            }
            None => {
                let created = self.api.create_employee(&input).await?;
                Saved::Created(created.map(|employee| employee.id))
            }
        };

        tracing::info!(employee_id = ?saved.id(), ?saved, "employee saved");
        self.form.reset_form();
        Ok(saved)
    }

    /// Ask for confirmation, then delete. Returns `false` when declined, in
    /// which case nothing was sent. Does not reload.
    pub async fn remove(&mut self, id: EmployeeId, confirm: &mut dyn Confirm) -> ApiResult<bool> {
        if !confirm.confirm(&format!("Delete employee #{}?", id)) {
            tracing::debug!(employee_id = %id, "delete cancelled");
            return Ok(false);
        }

        self.api.delete_employee(id).await?;
        tracing::info!(employee_id = %id, "employee deleted");
        Ok(true)
    }

    /// Load a record into the form for editing. Uses the loaded collection
    /// and falls back to the server when the id is not in it.
    pub async fn edit(&mut self, id: EmployeeId) -> ApiResult<()> {
        let employee = match self.records.iter().find(|e| e.id == id) {
            Some(employee) => employee.clone(),
            None => self.api.get_employee(id).await?,
        };
        self.form.fill_form(&employee);
        Ok(())
    }

    /// Run one action to completion and report what to show.
    pub async fn dispatch(&mut self, action: Action, confirm: &mut dyn Confirm) -> Vec<Effect> {
        tracing::debug!(?action, "dispatching");

        match action {
            Action::Submit => match self.save().await {
                Ok(saved) => {
                    let mut effects = vec![
                        Effect::Toast(saved.notice().to_string()),
                        Effect::FormReset,
                    ];
                    effects.push(self.reload_effect().await);
                    effects
                }
                Err(e) => vec![alert(&e)],
            },
            Action::Delete(id) => match self.remove(id, confirm).await {
                Ok(true) => {
                    let mut effects = vec![Effect::Toast("Employee deleted".to_string())];
                    effects.push(self.reload_effect().await);
                    effects
                }
                Ok(false) => vec![Effect::Cancelled],
                Err(e) => vec![alert(&e)],
            },
            Action::Edit(id) => match self.edit(id).await {
                Ok(()) => vec![Effect::FormFilled(id)],
                Err(e) => vec![alert(&e)],
            },
            Action::Refresh => vec![self.reload_effect().await],
            Action::Reset => {
                self.form.reset_form();
                vec![Effect::FormReset]
            }
        }
    }

    async fn reload_effect(&mut self) -> Effect {
        match self.load_employees().await {
            Ok(view) => Effect::Rendered { rows: view.len() },
            Err(e) => alert(&e),
        }
    }
}

fn alert(error: &payroll_http::ApiError) -> Effect {
    tracing::warn!(status = ?error.status_code(), error = %error, "request failed");
    Effect::Alert(error.user_message())
}
