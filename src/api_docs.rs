use utoipa::OpenApi;
use crate::controllers::{estimator_controller, quotation_controller, settings_controller, tracking_controller};
use crate::models::{catalog, estimate, order, quotation, settings};

#[derive(OpenApi)]
#[openapi(
    paths(
        estimator_controller::health,
        estimator_controller::get_catalog,
        estimator_controller::list_services,
        estimator_controller::estimate,
        quotation_controller::price_quotation,
        quotation_controller::create_quotation,
        quotation_controller::download_report,
        tracking_controller::search_order,
        settings_controller::get_theme,
        settings_controller::set_theme
    ),
    components(
        schemas(
            catalog::CatalogResponse,
            catalog::BrandSpec,
            catalog::ServiceOffering,
            estimate::EstimateRequest,
            estimate::EstimateResult,
            quotation::QuotationRequest,
            quotation::SystemSelection,
            quotation::QuotationBreakdown,
            quotation::QuotationResponse,
            order::Order,
            order::TimelineStep,
            settings::AppSettings,
            settings::ThemeUpdate,
            settings::HealthStatus
        )
    ),
    tags(
        (name = "solar-quote-engine", description = "Solar savings estimator and quotation API")
    )
)]
pub struct ApiDoc;
