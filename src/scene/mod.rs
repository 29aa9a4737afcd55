pub(crate) mod model;
pub(crate) mod profiles;
pub(crate) mod table;
