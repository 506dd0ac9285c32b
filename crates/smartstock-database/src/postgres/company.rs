//! Company table. Companies use the generic [`PgStore`](super::PgStore) as is.

use smartstock_entity::Company;

use super::table::{PgQuery, PgTable};

impl PgTable for Company {
    const TABLE: &'static str = "companies";
    const INSERT: &'static str = "INSERT INTO companies \
        (name, nit, address, phone, email, is_active, created_by, created_at, modified_by, modified_at) \
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *";
    const UPDATE: &'static str = "UPDATE companies SET \
        name = $2, nit = $3, address = $4, phone = $5, email = $6, is_active = $7, \
        created_by = $8, created_at = $9, modified_by = $10, modified_at = $11 \
        WHERE id = $1 RETURNING *";

    fn bind_columns<'q>(&'q self, query: PgQuery<'q, Self>) -> PgQuery<'q, Self> {
        query
            .bind(&self.name)
            .bind(&self.nit)
            .bind(&self.address)
            .bind(&self.phone)
            .bind(&self.email)
            .bind(self.is_active)
            .bind(&self.created_by)
            .bind(self.created_at)
            .bind(&self.modified_by)
            .bind(self.modified_at)
    }
}
