/// Sampling settings sent with every coaching request.
///
/// The defaults are the frozen values used by
/// [`crate::SmartCoach::get_coaching_response`]. They bias the provider toward
/// deterministic, schema-compliant output.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestConfig {
    /// Controls the randomness of the model's output.
    ///
    /// Lower values (e.g., 0.2) decrease randomness, resulting in more focused and
    /// deterministic responses.
    ///
    /// Defaults to `0.25`.
    pub temperature: f32,
    /// Controls diversity via nucleus sampling.
    ///
    /// Only the tokens comprising the top `top_p` probability mass are considered.
    ///
    /// Defaults to `0.8`.
    pub top_p: f32,
    /// Maximum number of tokens for the model's output.
    ///
    /// Sized to fit the full structured result. Corresponds to the `max_tokens`
    /// parameter of OpenAI-compatible APIs.
    ///
    /// Defaults to `1000`.
    pub max_tokens: u32,
    /// Request `response_format: {"type": "json_object"}` from providers that support it.
    ///
    /// Defaults to `true`.
    pub json_mode: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            temperature: 0.25,
            top_p: 0.8,
            max_tokens: 1000,
            json_mode: true,
        }
    }
}

impl RequestConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl std::fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "    temperature: {}", self.temperature)?;
        writeln!(f, "    top_p: {}", self.top_p)?;
        writeln!(f, "    max_tokens: {}", self.max_tokens)?;
        write!(f, "    json_mode: {}", self.json_mode)
    }
}

pub trait RequestConfigTrait {
    fn config(&mut self) -> &mut RequestConfig;

    fn temperature(&mut self, temperature: f32) -> &mut Self {
        self.config().temperature = temperature;
        self
    }

    fn top_p(&mut self, top_p: f32) -> &mut Self {
        self.config().top_p = top_p;
        self
    }

    fn max_tokens(&mut self, max_tokens: u32) -> &mut Self {
        self.config().max_tokens = max_tokens;
        self
    }

    fn json_mode(&mut self, json_mode: bool) -> &mut Self {
        self.config().json_mode = json_mode;
        self
    }
}
