pub(crate) mod guard;
pub(crate) mod route;
pub(crate) mod router;
