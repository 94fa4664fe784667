// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod api {
        pub(crate) mod account_api;
        pub(crate) mod accounting_api;
        pub(crate) mod auth_api;
        pub(crate) mod document_api;
        pub(crate) mod expense_claim_api;
        pub(crate) mod payment_api;
        pub(crate) mod receipt_payment_api;
        pub(crate) mod report_api;
        pub(crate) mod voucher_api;
    }
    pub(crate) mod datasources {
        pub(crate) mod api_client;
        pub(crate) mod http_transport;
        pub(crate) mod storage_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod envelope_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod jwt_claims_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod auth;
        pub(crate) mod document;
        pub(crate) mod expense_claim;
        pub(crate) mod handlers;
        pub(crate) mod owner;
        pub(crate) mod page;
        pub(crate) mod page_context;
        pub(crate) mod payment;
        pub(crate) mod receipt_payment;
        pub(crate) mod report;
        pub(crate) mod route;
        pub(crate) mod session;
        pub(crate) mod tab;
        pub(crate) mod voucher;
    }
    pub(crate) mod logic {
        pub(crate) mod context_store;
        pub(crate) mod download;
        pub(crate) mod route_table;
        pub(crate) mod session_store;
        pub(crate) mod tab_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod auth_usecase;
        pub(crate) mod export_usecase;
        pub(crate) mod navigation_usecase;
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_export;
    pub(crate) mod report_printer;
    pub(crate) mod utils;
}

#[cfg(test)]
pub(crate) mod test_support;

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::auth::*;
        pub use crate::domain::entities::document::*;
        pub use crate::domain::entities::expense_claim::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::owner::*;
        pub use crate::domain::entities::page::*;
        pub use crate::domain::entities::page_context::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::receipt_payment::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::route::*;
        pub use crate::domain::entities::session::*;
        pub use crate::domain::entities::tab::*;
        pub use crate::domain::entities::voucher::*;
    }

    pub mod api {
        pub use crate::data::api::account_api::*;
        pub use crate::data::api::accounting_api::*;
        pub use crate::data::api::auth_api::*;
        pub use crate::data::api::document_api::*;
        pub use crate::data::api::expense_claim_api::*;
        pub use crate::data::api::payment_api::*;
        pub use crate::data::api::receipt_payment_api::*;
        pub use crate::data::api::report_api::*;
        pub use crate::data::api::voucher_api::*;
        pub use crate::data::models::iso_date_model::parse_iso_date;
        pub use crate::data::datasources::api_client::*;
        pub use crate::data::datasources::http_transport::*;
        pub use crate::data::datasources::storage_datasource::*;
    }

    pub mod stores {
        pub use crate::domain::logic::context_store::*;
        pub use crate::domain::logic::download::*;
        pub use crate::domain::logic::route_table::*;
        pub use crate::domain::logic::session_store::*;
        pub use crate::domain::logic::tab_store::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::auth_usecase::*;
        pub use crate::domain::usecases::export_usecase::*;
        pub use crate::domain::usecases::navigation_usecase::*;
        pub use crate::domain::usecases::report_usecase::*;
    }

    pub mod presentation {
        pub use crate::presentation::csv_export::*;
        pub use crate::presentation::report_printer::*;
        pub use crate::presentation::utils::format_amount;
    }
}
