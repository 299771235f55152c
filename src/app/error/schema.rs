/// JSON body returned by the API for every failed request.
#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

#[derive(serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}
