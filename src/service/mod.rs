//! CrudService: generic CRUD over the in-memory resource store.

mod crud;
pub use crud::CrudService;
