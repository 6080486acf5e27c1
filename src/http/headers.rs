use http::{header::AsHeaderName, HeaderMap, HeaderName, HeaderValue};

pub trait HeaderMapExt {
    fn headers(&self) -> &HeaderMap;

    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn get_header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers().get(name).and_then(|value| value.to_str().ok())
    }

    fn insert_header<V>(&mut self, name: HeaderName, value: V) -> Result<(), http::Error>
    where
        V: TryInto<HeaderValue>,
        V::Error: Into<http::Error>,
    {
        self.headers_mut()
            .insert(name, value.try_into().map_err(Into::into)?);
        Ok(())
    }
}
