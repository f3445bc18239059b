use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use oasmd::{ContentType, LlmsOptionsBuilder, LlmsService, RouteCollection};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    let listener = TcpListener::bind(addr).await?;
    println!("Listening on http://{}", addr);

    let routes = RouteCollection::<String>::new();

    // Markdown rendering of a local specification file.
    let markdown = LlmsOptionsBuilder::new()
        .from_file("demos/hyper-llms/openapi-v3.1.0.json")
        .header("> Documentation of the Pet Store API for LLM clients.")
        .build()?;
    routes.insert_handler("/llms.txt".to_string(), markdown)?;

    // The same document served as plain text.
    let plain = LlmsOptionsBuilder::new()
        .from_file("demos/hyper-llms/openapi-v3.1.0.json")
        .content_type(ContentType::Plain)
        .build()?;
    routes.insert_handler("/llms-plain.txt".to_string(), plain)?;

    let service = LlmsService::new(Arc::new(routes));
    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);

        let service_clone = service.clone();
        tokio::task::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, service_clone)
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
