use inquire::Confirm;
use sieve_core::Confirmation;

use crate::ui;

/// Asks on the terminal before showing every record unfiltered.
pub struct InquireConfirmation;

impl Confirmation for InquireConfirmation {
    fn confirm_unfiltered(&mut self, total: usize) -> bool {
        ui::warning(&format!("Nenhum filtro selecionado ({} contratos)", total));
        match Confirm::new("Nenhum filtro selecionado. Deseja exibir todos os dados?")
            .with_default(false)
            .prompt()
        {
            Ok(answer) => answer,
            Err(e) => {
                ui::warning(&format!("Couldn't read answer: {}", e));
                false
            }
        }
    }
}
