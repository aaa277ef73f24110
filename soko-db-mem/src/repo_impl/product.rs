use soko_core::entities::Product;

use super::*;

impl ProductRepo for MemoryBackend {
    fn create_or_update_product(&self, product: Product) -> Result<()> {
        let mut tables = self.tables.write();
        tables.products.insert(product.id.clone(), product);
        Ok(())
    }

    fn get_product(&self, id: &str) -> Result<Product> {
        self.tables
            .read()
            .products
            .get(id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_products(&self, ids: &[&str]) -> Result<Vec<Product>> {
        let tables = self.tables.read();
        Ok(ids
            .iter()
            .filter_map(|id| tables.products.get(*id).cloned())
            .collect())
    }

    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.tables.read().products.values().cloned().collect())
    }

    fn count_products(&self) -> Result<usize> {
        Ok(self.tables.read().products.len())
    }
}
