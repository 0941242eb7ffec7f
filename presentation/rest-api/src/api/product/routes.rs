use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "product.invalid_id";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting storefront products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let body = body.0;
        let params = CreateProductParams {
            categories: body.categories,
            summary: body.summary,
            expired_date: body.expired_date,
            price: body.price,
            sku: body.sku,
            name: body.name,
            supplier_id: body.supplier_id,
            image_file_names: body.image_file_names,
            stock: body.stock,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List the catalog
    ///
    /// Returns every product, most recently added first.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every editable field. `addedDate` is kept.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let body = body.0;
        let params = UpdateProductParams {
            id: uuid,
            categories: body.categories,
            summary: body.summary,
            expired_date: body.expired_date,
            price: body.price,
            sku: body.sku,
            name: body.name,
            supplier_id: body.supplier_id,
            image_file_names: body.image_file_names,
            stock: body.stock,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use chrono::Utc;
    use mockall::mock;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use serde_json::json;
    use std::collections::BTreeSet;

    mock! {
        pub Create {}

        #[async_trait]
        impl CreateProductUseCase for Create {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub GetAll {}

        #[async_trait]
        impl GetAllProductsUseCase for GetAll {
            async fn execute(&self) -> Result<Vec<Product>, ProductError>;
        }
    }

    mock! {
        pub GetById {}

        #[async_trait]
        impl GetProductByIdUseCase for GetById {
            async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Update {}

        #[async_trait]
        impl UpdateProductUseCase for Update {
            async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Delete {}

        #[async_trait]
        impl DeleteProductUseCase for Delete {
            async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
        }
    }

    struct Mocks {
        create: MockCreate,
        get_all: MockGetAll,
        get_by_id: MockGetById,
        update: MockUpdate,
        delete: MockDelete,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                create: MockCreate::new(),
                get_all: MockGetAll::new(),
                get_by_id: MockGetById::new(),
                update: MockUpdate::new(),
                delete: MockDelete::new(),
            }
        }

        fn client(self) -> TestClient<Route> {
            let api = ProductApi::new(
                Arc::new(self.create),
                Arc::new(self.get_all),
                Arc::new(self.get_by_id),
                Arc::new(self.update),
                Arc::new(self.delete),
            );
            let service = OpenApiService::new(api, "iShop API", "test");
            TestClient::new(Route::new().nest("/", service))
        }
    }

    fn sample_product(sku: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            BTreeSet::from(["Coffee".to_string()]),
            "Medium roast".to_string(),
            now,
            now,
            9.99,
            sku.to_string(),
            "House blend".to_string(),
            Uuid::new_v4(),
            Vec::new(),
            20,
            now,
        )
    }

    fn request_body() -> serde_json::Value {
        json!({
            "name": "House blend",
            "sku": "sku-1",
            "price": 9.99,
            "stock": 20,
            "expiredDate": "2027-01-01T00:00:00Z",
            "supplierId": Uuid::new_v4().to_string(),
            "imageFileNames": ["blend.png"]
        })
    }

    #[tokio::test]
    async fn should_return_created_product_in_camel_case() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .withf(|params| params.sku == "sku-1" && params.image_file_names.len() == 1)
            .times(1)
            .returning(|_| Ok(sample_product("sku-1")));
        let client = mocks.client();

        let response = client
            .post("/api/products")
            .body_json(&request_body())
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let body = json.value().object();
        body.get("sku").assert_string("sku-1");
        body.get("stock").assert_i64(20);
        body.get("categories").array().assert_len(1);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_validation_fails() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .returning(|_| Err(ProductError::InvalidPrice));
        let client = mocks.client();

        let response = client
            .post("/api/products")
            .body_json(&request_body())
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response
            .assert_json(json!({"name": "ValidationError", "message": "product.invalid_price"}))
            .await;
    }

    #[tokio::test]
    async fn should_return_conflict_when_sku_taken() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .returning(|_| Err(ProductError::SkuDuplicated));
        let client = mocks.client();

        let response = client
            .post("/api/products")
            .body_json(&request_body())
            .send()
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_list_products() {
        let mut mocks = Mocks::new();
        mocks
            .get_all
            .expect_execute()
            .returning(|| Ok(vec![sample_product("sku-1"), sample_product("sku-2")]));
        let client = mocks.client();

        let response = client.get("/api/products").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        json.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_listing_fails() {
        let mut mocks = Mocks::new();
        mocks
            .get_all
            .expect_execute()
            .returning(|| Err(ProductError::Repository(RepositoryError::DatabaseError)));
        let client = mocks.client();

        let response = client.get("/api/products").send().await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_reject_malformed_id_without_calling_use_case() {
        let mut mocks = Mocks::new();
        mocks.get_by_id.expect_execute().never();
        mocks.delete.expect_execute().never();
        let client = mocks.client();

        let response = client.get("/api/products/not-a-uuid").send().await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response
            .assert_json(json!({"name": "ValidationError", "message": "product.invalid_id"}))
            .await;

        let response = client.delete("/api/products/42").send().await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let mut mocks = Mocks::new();
        mocks
            .get_by_id
            .expect_execute()
            .returning(|_| Err(ProductError::NotFound));
        let client = mocks.client();

        let response = client
            .get(format!("/api/products/{}", Uuid::new_v4()))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response
            .assert_json(json!({"name": "NotFound", "message": "product.not_found"}))
            .await;
    }

    #[tokio::test]
    async fn should_pass_path_id_to_update() {
        let id = Uuid::new_v4();
        let mut mocks = Mocks::new();
        mocks
            .update
            .expect_execute()
            .withf(move |params| params.id == id)
            .times(1)
            .returning(|_| Ok(sample_product("sku-1")));
        let client = mocks.client();

        let response = client
            .put(format!("/api/products/{}", id))
            .body_json(&request_body())
            .send()
            .await;

        response.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_return_no_content_after_delete() {
        let mut mocks = Mocks::new();
        mocks.delete.expect_execute().times(1).returning(|_| Ok(()));
        let client = mocks.client();

        let response = client
            .delete(format!("/api/products/{}", Uuid::new_v4()))
            .send()
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }
}
