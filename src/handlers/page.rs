//! Index page
//!
//! One static page: mode selector, the two input flows and a results
//! region. Submissions go through fetch() and the returned fragments are
//! injected as-is.

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sentiscope</title>
<style>
  body { font-family: sans-serif; max-width: 720px; margin: 0 auto; padding: 0 16px; }
  .main-title { text-align: center; color: #3366cc; font-size: 40px; font-weight: bold; margin-top: 10px; }
  .subtext { text-align: center; font-size: 18px; color: #777; margin-bottom: 20px; }
  .flow { display: none; margin-bottom: 20px; }
  .flow.active { display: block; }
  textarea, input[type=text], select { width: 100%; box-sizing: border-box; padding: 8px; font-size: 16px; margin: 8px 0; }
  textarea { height: 150px; }
  button { background: #3366cc; color: white; border: none; border-radius: 6px; padding: 10px 18px; font-size: 16px; cursor: pointer; }
  button:disabled { background: #aab; }
  .notice { background: #e8f0fe; border-radius: 8px; padding: 12px; margin: 15px 0; }
  .notice.warning { background: #fff3cd; }
  .notice.error { background: #fdecea; color: #b71c1c; }
</style>
</head>
<body>
<div class="main-title">&#128038; Sentiment Analyzer</div>
<div class="subtext">Analyze your own text or posts from any public account</div>

<select id="mode">
  <option value="text">&#9997;&#65039; Input text</option>
  <option value="posts">&#128036; Get posts from user</option>
</select>

<div id="flow-text" class="flow active">
  <textarea id="text-input" placeholder="Type something like 'I love this product!'"></textarea>
  <button id="analyze-btn">Analyze Sentiment</button>
</div>

<div id="flow-posts" class="flow">
  <input type="text" id="username-input" placeholder="elonmusk (no @ required)">
  <button id="fetch-btn">Fetch Posts</button>
</div>

<div id="results"></div>

<script>
const mode = document.getElementById("mode");
const results = document.getElementById("results");

mode.addEventListener("change", () => {
  document.getElementById("flow-text").classList.toggle("active", mode.value === "text");
  document.getElementById("flow-posts").classList.toggle("active", mode.value === "posts");
  results.innerHTML = "";
});

async function submit(url, payload, button) {
  button.disabled = true;
  try {
    const response = await fetch(url, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(payload),
    });
    results.innerHTML = await response.text();
  } finally {
    button.disabled = false;
  }
}

document.getElementById("analyze-btn").addEventListener("click", (e) => {
  submit("/api/v1/analyze", { text: document.getElementById("text-input").value }, e.target);
});

document.getElementById("fetch-btn").addEventListener("click", (e) => {
  submit("/api/v1/posts", { username: document.getElementById("username-input").value }, e.target);
});
</script>
</body>
</html>
"##;
