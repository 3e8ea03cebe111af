use poem::test::TestClient;
use poem::Endpoint;

use crate::model::{Regression, TRAINING_SET};
use crate::prelude::*;
use crate::web::create_app;

/// Builds a client against the full application with the model fit the way `main` does it.
pub fn create_test_client() -> Result<TestClient<impl Endpoint>> {
    let regression = Regression::fit(&TRAINING_SET)?;
    Ok(TestClient::new(create_app(regression)))
}
