#![allow(dead_code)]

use std::sync::Arc;

use signmaster::{config::Config, routes, state::AppState, store::MemoryStore};

pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub store: MemoryStore,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_text(&self, path: &str) -> String {
        self.get(path).await.text().await.expect("Failed to read body")
    }

    /// Shows the current question of `path`, then picks the option labelled `text`.
    pub async fn answer(&self, path: &str, text: &str) -> reqwest::Response {
        let page = self.get_text(path).await;
        let value = option_value(&page, text);
        self.post_form(path, &[("option", &value)]).await
    }

    /// Signs up and logs in a fresh user, returning the username.
    pub async fn login_new_user(&self) -> String {
        let username = format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8]);
        let email = format!("{username}@example.com");

        let resp = self
            .post_form(
                "/signup",
                &[("username", &username), ("email", &email), ("password", PASSWORD)],
            )
            .await;
        assert_eq!(location(&resp), "/login");

        let resp = self
            .post_form("/login", &[("username", &username), ("password", PASSWORD)])
            .await;
        assert_eq!(location(&resp), "/quiz");

        username
    }
}

/// Quiz ids of the seeded content.
pub const GREETINGS: i64 = 1;
pub const NUMBERS: i64 = 2;
pub const ALPHABET: i64 = 3;
pub const EMPTY: i64 = 4;

/// Every quiz question's correct answer.
pub const CORRECT: &str = "Yes";
pub const WRONG: &str = "No";

fn seed(store: &MemoryStore) {
    let greetings = store.add_quiz("Greetings").unwrap();
    for text in ["Hello", "Thanks", "Goodbye"] {
        store
            .add_question(greetings, text, Some("/static/hello.png"), CORRECT, &[WRONG, "Maybe"])
            .unwrap();
    }

    let numbers = store.add_quiz("Numbers").unwrap();
    for text in ["One", "Two"] {
        store
            .add_question(numbers, text, None, CORRECT, &[WRONG, CORRECT])
            .unwrap();
    }

    let alphabet = store.add_quiz("Alphabet").unwrap();
    for i in 1..=10 {
        store
            .add_question(alphabet, &format!("Sign {i}"), None, &format!("Letter {i}"), &[])
            .unwrap();
    }

    store.add_quiz("Empty").unwrap();
}

/// Spawns the app on a random port against a seeded in-memory store.
pub async fn spawn_app() -> TestApp {
    let store = MemoryStore::new();
    seed(&store);

    let state = AppState {
        store: Arc::new(store.clone()),
        config: Config::for_tests("test_secret_for_integration_tests"),
    };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        store,
        client,
    }
}

/// The redirect target of a `303 See Other` response.
pub fn location(resp: &reqwest::Response) -> String {
    assert_eq!(resp.status().as_u16(), 303, "expected a redirect");
    resp.headers()
        .get("location")
        .expect("redirect without location")
        .to_str()
        .unwrap()
        .to_string()
}

/// Text of the first `<h2>` on the page.
pub fn heading(html: &str) -> String {
    let start = html.find("<h2>").expect("page has no heading") + "<h2>".len();
    let end = html[start..].find("</h2>").unwrap() + start;
    html[start..end].to_string()
}

/// Form value of the radio option labelled `text`.
pub fn option_value(html: &str, text: &str) -> String {
    let label = html
        .find(&format!("> {text}</label>"))
        .unwrap_or_else(|| panic!("no option labelled {text}"));
    let start = html[..label].rfind("value=\"").unwrap() + "value=\"".len();
    let end = html[start..].find('"').unwrap() + start;
    html[start..end].to_string()
}
