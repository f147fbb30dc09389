macro_rules! unexpected_status_code {
    ($response:expr) => {{
        let __response = $response;

        return Err($crate::errors::ClientError::unexpected_status_code(
            __response.status(),
            __response.text(),
        )
        .into());
    }};
}

pub(crate) use unexpected_status_code;
