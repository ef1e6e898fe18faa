pub fn get_api_base_url() -> &'static str {
    match option_env!("API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:3000",  // Development URL when running locally
    }
}
