//! HTTP 客户端适配
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 `HttpClient`。
//! 任何 HTTP 状态码都原样返回，只有 fetch 本身失败才是错误。

use gloo_net::http::{Method, RequestBuilder};
use localaudit::{ApiError, HttpClient, HttpRequest, HttpResponse};
use localaudit_shared::HttpMethod;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn method_of(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = RequestBuilder::new(&req.url).method(method_of(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(format!("请求构建失败: {e}")))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("网络错误: {e}")))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ApiError::Transport(format!("响应读取失败: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
