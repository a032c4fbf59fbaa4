pub mod organization_rules_dto;

pub use organization_rules_dto::{
    CodeOrName, OrganizationDto, OrganizationRulesDto, RulesValidationError,
};
