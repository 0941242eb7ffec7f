use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::supplier::use_cases::create::{
    CreateSupplierParams, CreateSupplierUseCase,
};
use business::domain::supplier::use_cases::delete::{
    DeleteSupplierParams, DeleteSupplierUseCase,
};
use business::domain::supplier::use_cases::get_all::GetAllSuppliersUseCase;
use business::domain::supplier::use_cases::get_by_id::{
    GetSupplierByIdParams, GetSupplierByIdUseCase,
};
use business::domain::supplier::use_cases::update::{
    UpdateSupplierParams, UpdateSupplierUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::supplier::dto::{SupplierRequest, SupplierResponse};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "supplier.invalid_id";

pub struct SupplierApi {
    create_use_case: Arc<dyn CreateSupplierUseCase>,
    get_all_use_case: Arc<dyn GetAllSuppliersUseCase>,
    get_by_id_use_case: Arc<dyn GetSupplierByIdUseCase>,
    update_use_case: Arc<dyn UpdateSupplierUseCase>,
    delete_use_case: Arc<dyn DeleteSupplierUseCase>,
}

impl SupplierApi {
    pub fn new(
        create_use_case: Arc<dyn CreateSupplierUseCase>,
        get_all_use_case: Arc<dyn GetAllSuppliersUseCase>,
        get_by_id_use_case: Arc<dyn GetSupplierByIdUseCase>,
        update_use_case: Arc<dyn UpdateSupplierUseCase>,
        delete_use_case: Arc<dyn DeleteSupplierUseCase>,
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

/// Supplier management API
#[OpenApi]
impl SupplierApi {
    /// Create a new supplier
    #[oai(path = "/api/suppliers", method = "post", tag = "ApiTags::Suppliers")]
    async fn create_supplier(&self, body: Json<SupplierRequest>) -> CreateSupplierResponse {
        let params = CreateSupplierParams {
            name: body.0.name,
            address: body.0.address,
            phone: body.0.phone,
        };

        match self.create_use_case.execute(params).await {
            Ok(supplier) => CreateSupplierResponse::Created(Json(supplier.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateSupplierResponse::BadRequest(json),
                    _ => CreateSupplierResponse::InternalError(json),
                }
            }
        }
    }

    /// List all suppliers
    #[oai(path = "/api/suppliers", method = "get", tag = "ApiTags::Suppliers")]
    async fn get_all_suppliers(&self) -> GetAllSuppliersResponse {
        match self.get_all_use_case.execute().await {
            Ok(suppliers) => GetAllSuppliersResponse::Ok(Json(
                suppliers.into_iter().map(|s| s.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllSuppliersResponse::InternalError(json)
            }
        }
    }

    /// Get a supplier by ID
    #[oai(path = "/api/suppliers/:id", method = "get", tag = "ApiTags::Suppliers")]
    async fn get_supplier_by_id(&self, id: Path<String>) -> GetSupplierByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetSupplierByIdResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        match self
            .get_by_id_use_case
            .execute(GetSupplierByIdParams { id: uuid })
            .await
        {
            Ok(supplier) => GetSupplierByIdResponse::Ok(Json(supplier.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSupplierByIdResponse::NotFound(json),
                    _ => GetSupplierByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a supplier
    #[oai(path = "/api/suppliers/:id", method = "put", tag = "ApiTags::Suppliers")]
    async fn update_supplier(
        &self,
        id: Path<String>,
        body: Json<SupplierRequest>,
    ) -> UpdateSupplierResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateSupplierResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        let params = UpdateSupplierParams {
            id: uuid,
            name: body.0.name,
            address: body.0.address,
            phone: body.0.phone,
        };

        match self.update_use_case.execute(params).await {
            Ok(supplier) => UpdateSupplierResponse::Ok(Json(supplier.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateSupplierResponse::BadRequest(json),
                    404 => UpdateSupplierResponse::NotFound(json),
                    _ => UpdateSupplierResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a supplier
    ///
    /// Fails with 500 while products still reference the supplier.
    #[oai(path = "/api/suppliers/:id", method = "delete", tag = "ApiTags::Suppliers")]
    async fn delete_supplier(&self, id: Path<String>) -> DeleteSupplierResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteSupplierResponse::BadRequest(ErrorResponse::invalid_id(INVALID_ID));
        };

        match self
            .delete_use_case
            .execute(DeleteSupplierParams { id: uuid })
            .await
        {
            Ok(()) => DeleteSupplierResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteSupplierResponse::NotFound(json),
                    _ => DeleteSupplierResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSupplierResponse {
    #[oai(status = 201)]
    Created(Json<SupplierResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllSuppliersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SupplierResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSupplierByIdResponse {
    #[oai(status = 200)]
    Ok(Json<SupplierResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateSupplierResponse {
    #[oai(status = 200)]
    Ok(Json<SupplierResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteSupplierResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
