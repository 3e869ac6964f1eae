use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialize OpenAPI document to JSON");
    println!("{doc}");
}
