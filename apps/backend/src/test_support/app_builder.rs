//! Test service builder: given an AppState, build an initialized Actix test
//! service with the production routes and tracing middleware.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::web;
use actix_web::{App, Error as ActixError};

use crate::error::AppError;
use crate::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use crate::state::app_state::AppState;

pub fn create_test_app_builder(state: AppState) -> TestAppBuilder {
    TestAppBuilder { state }
}

pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    /// Build the Actix test service over the production routes.
    pub async fn build(
        self,
    ) -> Result<
        impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
        AppError,
    > {
        let app = App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state))
            .configure(crate::routes::configure);

        Ok(actix_web::test::init_service(app).await)
    }
}
