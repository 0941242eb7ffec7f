use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::supplier::repository::SupplierRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::supplier::create::CreateSupplierUseCaseImpl;
use business::application::supplier::delete::DeleteSupplierUseCaseImpl;
use business::application::supplier::get_all::GetAllSuppliersUseCaseImpl;
use business::application::supplier::get_by_id::GetSupplierByIdUseCaseImpl;
use business::application::supplier::update::UpdateSupplierUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::supplier::routes::SupplierApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub supplier_api: SupplierApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let supplier_repository = Arc::new(SupplierRepositoryPostgres::new(pool));

        // Product use cases
        let create_product = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            supplier_repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            supplier_repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Supplier use cases
        let create_supplier = Arc::new(CreateSupplierUseCaseImpl {
            repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_suppliers = Arc::new(GetAllSuppliersUseCaseImpl {
            repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let get_supplier_by_id = Arc::new(GetSupplierByIdUseCaseImpl {
            repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let update_supplier = Arc::new(UpdateSupplierUseCaseImpl {
            repository: supplier_repository.clone(),
            logger: logger.clone(),
        });
        let delete_supplier = Arc::new(DeleteSupplierUseCaseImpl {
            repository: supplier_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(),
            product_api: ProductApi::new(
                create_product,
                get_all_products,
                get_product_by_id,
                update_product,
                delete_product,
            ),
            supplier_api: SupplierApi::new(
                create_supplier,
                get_all_suppliers,
                get_supplier_by_id,
                update_supplier,
                delete_supplier,
            ),
        }
    }
}
