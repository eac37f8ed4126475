auto_derived!(
    /// # Server Information
    pub struct ApiInfo {
        /// Agora API version
        pub version: String,
    }
);
