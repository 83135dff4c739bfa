pub(crate) mod spinner;
