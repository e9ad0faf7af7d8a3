//! Built-in filter definitions shown on every dashboard session

use iso_currency::Currency;
use rust_decimal::Decimal;

use super::{DefinitionId, FilterConfig, FilterDefinition, Origin, ValueFormat};
use crate::FieldId;

pub const FLOW_TYPE: &str = "flowType";
pub const CONTRACT_VALUE: &str = "contractValue";
pub const PAYMENT_VALUE: &str = "paymentValue";
pub const LOCATION: &str = "location";
pub const DATE_PERIOD: &str = "datePeriod";
pub const PAYMENT_STATUS: &str = "paymentStatus";
pub const SUPPLIER_NAME: &str = "supplierName";
pub const CNPJ: &str = "cnpj";
pub const COST_CENTER: &str = "costCenter";

/// Token that selects (or deselects) every flow type at once.
pub const ALL_FLOW_TYPES: &str = "Todos os contratos";

pub const FLOW_TYPE_OPTIONS: [&str; 6] = ["RE", "Real State", "FI", "Proposta", "Engenharia", "RC"];
pub const REGION_OPTIONS: [&str; 5] = ["sudeste", "sul", "nordeste", "norte", "centro-oeste"];
pub const STATE_OPTIONS: [&str; 5] = ["sp", "rj", "mg", "rs", "pr"];
pub const PAYMENT_STATUS_OPTIONS: [&str; 3] = ["Pago", "Pendente", "Vencido"];

const VALUE_RANGE_MAX: i64 = 10_000_000;
const VALUE_RANGE_STEP: i64 = 10_000;

/// Returns the built-in definitions in their fixed declaration order.
pub fn builtin_definitions() -> Vec<FilterDefinition> {
    vec![
        builtin(
            FLOW_TYPE,
            "Tipo de fluxo",
            "type",
            FilterConfig::MultiChoice {
                options: to_options(&FLOW_TYPE_OPTIONS),
                select_all: Some(ALL_FLOW_TYPES.to_string()),
            },
        ),
        builtin(CONTRACT_VALUE, "Valor do contrato", "value", value_range()),
        builtin(PAYMENT_VALUE, "Valor do pagamento", "paymentValue", value_range()),
        builtin(
            LOCATION,
            "Localização",
            "location",
            FilterConfig::SingleChoice {
                options: REGION_OPTIONS
                    .iter()
                    .chain(STATE_OPTIONS.iter())
                    .map(|o| o.to_string())
                    .collect(),
            },
        ),
        builtin(DATE_PERIOD, "Período", "dueDate", FilterConfig::DateRange),
        builtin(
            PAYMENT_STATUS,
            "Status de vencimento",
            "paymentStatus",
            FilterConfig::SingleChoice {
                options: to_options(&PAYMENT_STATUS_OPTIONS),
            },
        ),
        builtin(
            SUPPLIER_NAME,
            "Nome fornecedor",
            "supplier",
            free_text("Digite o nome do fornecedor"),
        ),
        builtin(CNPJ, "CNPJ", "cnpj", free_text("00.000.000/0000-00")),
        builtin(
            COST_CENTER,
            "Centro de custo",
            "costCenter",
            free_text("Digite o centro de custo"),
        ),
    ]
}

fn builtin(id: &str, name: &str, source_field: &str, config: FilterConfig) -> FilterDefinition {
    FilterDefinition {
        id: DefinitionId::new(id),
        name: name.to_string(),
        source_field: FieldId::new(source_field),
        table: None,
        origin: Origin::Builtin,
        config,
    }
}

fn value_range() -> FilterConfig {
    FilterConfig::Range {
        min: Decimal::ZERO,
        max: Decimal::from(VALUE_RANGE_MAX),
        step: Decimal::from(VALUE_RANGE_STEP),
        format: ValueFormat::Currency(Currency::BRL),
    }
}

fn free_text(placeholder: &str) -> FilterConfig {
    FilterConfig::FreeText {
        placeholder: Some(placeholder.to_string()),
    }
}

fn to_options(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let definitions = builtin_definitions();
        let ids: HashSet<_> = definitions.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), definitions.len());
    }

    #[test]
    fn test_builtin_declaration_order() {
        let ids: Vec<_> = builtin_definitions()
            .into_iter()
            .map(|d| d.id.as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                FLOW_TYPE,
                CONTRACT_VALUE,
                PAYMENT_VALUE,
                LOCATION,
                DATE_PERIOD,
                PAYMENT_STATUS,
                SUPPLIER_NAME,
                CNPJ,
                COST_CENTER
            ]
        );
    }

    #[test]
    fn test_builtins_have_source_fields() {
        for definition in builtin_definitions() {
            assert!(definition.is_builtin());
            assert!(!definition.source_field.as_str().is_empty());
        }
    }
}
