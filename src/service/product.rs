use crate::{
    client::{ApiClient, ApiRequest},
    error::Error,
    model::{
        api::EntityId,
        page::{Listing, PageQuery},
        product::{ProductDraft, ProductDto, ProductType},
    },
    session::Session,
};

const PRODUCTS_PATH: &str = "/api/canvas/products";
const PRODUCT_PATH: &str = "/api/canvas/product";
const PRODUCT_TYPES_PATH: &str = "/api/database/product-types";
const RESOURCE: &str = "Product";

/// Service for the insurance product catalogue.
pub struct ProductService<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> ProductService<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// Retrieves one page of products, optionally for a single carrier.
    ///
    /// Accepts both the paginated envelope and a bare array from the backend.
    pub async fn get_products(
        &self,
        page: PageQuery,
        carrier: Option<&str>,
    ) -> Result<Vec<ProductDto>, Error> {
        let mut request = ApiRequest::get(PRODUCTS_PATH)
            .page(page)
            .resource(RESOURCE)
            .action("fetch products");
        if let Some(carrier) = carrier {
            request = request.query("carrier", carrier);
        }

        let products: Listing<ProductDto> = self.client.send(request, Some(self.session)).await?;

        Ok(products.into_items())
    }

    pub async fn get_product(&self, product_id: &EntityId) -> Result<ProductDto, Error> {
        let request = ApiRequest::get(format!("{}/{}", PRODUCT_PATH, product_id))
            .resource(RESOURCE)
            .action("fetch product");

        Ok(self.client.send(request, Some(self.session)).await?)
    }

    pub async fn create_product(&self, product: &ProductDraft) -> Result<ProductDto, Error> {
        let request = ApiRequest::post(PRODUCTS_PATH)
            .json(product)?
            .resource(RESOURCE)
            .action("create product");

        Ok(self.client.send(request, Some(self.session)).await?)
    }

    pub async fn update_product(
        &self,
        product_id: &EntityId,
        product: &ProductDraft,
    ) -> Result<ProductDto, Error> {
        let request = ApiRequest::put(format!("{}/{}", PRODUCT_PATH, product_id))
            .json(product)?
            .resource(RESOURCE)
            .action("update product");

        Ok(self.client.send(request, Some(self.session)).await?)
    }

    pub async fn delete_product(&self, product_id: &EntityId) -> Result<(), Error> {
        let request = ApiRequest::delete(format!("{}/{}", PRODUCT_PATH, product_id))
            .resource(RESOURCE)
            .action("delete product");

        Ok(self.client.send_empty(request, Some(self.session)).await?)
    }

    pub async fn get_product_types(&self) -> Result<Vec<ProductType>, Error> {
        let request = ApiRequest::get(PRODUCT_TYPES_PATH)
            .resource("Product type")
            .action("fetch product types");

        let types: Listing<ProductType> = self.client.send(request, Some(self.session)).await?;

        Ok(types.into_items())
    }
}
