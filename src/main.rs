use iced::widget::{container, image};
use iced::{Element, Length, Task, Theme};
use tokio::time;

mod fetch;
mod poll;
mod ui;

use fetch::{CatImage, FetchError};
use poll::{Effect, Poller, WAIT_INTERVAL};

/// Main application state
struct CatShow {
    /// The polling state machine driving the whole app
    poller: Poller,
    /// HTTP client shared by every loading cycle
    client: reqwest::Client,
    /// Decoded picture for the view, alongside the URL the poller holds
    picture: Option<image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The 2-second wait elapsed
    Wake,
    /// The in-flight fetch settled, one way or the other
    Fetched(Result<CatImage, FetchError>),
}

impl CatShow {
    /// Create the app already in its loading phase, first fetch in flight
    fn new() -> (Self, Task<Message>) {
        let (poller, effect) = Poller::new();
        let client = fetch::client();

        println!("🐱 Cat show starting, polling {}", fetch::MEOW_ENDPOINT);

        let app = CatShow {
            poller,
            client,
            picture: None,
        };
        let task = app.run(effect);

        (app, task)
    }

    /// Turn a state machine effect into the one background task it asks for
    fn run(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Wait => Task::perform(time::sleep(WAIT_INTERVAL), |_| Message::Wake),
            Effect::Fetch => Task::perform(
                fetch::fetch_random_cat(self.client.clone()),
                Message::Fetched,
            ),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let effect = match message {
            Message::Wake => self.poller.wake(),
            Message::Fetched(result) => {
                let fetched = match result {
                    Ok(cat) => {
                        println!("😺 New cat: {}", cat.url);
                        self.picture = Some(image::Handle::from_bytes(cat.bytes));
                        Some(cat.url)
                    }
                    Err(err) => {
                        // Swallowed: the previous picture stays up and
                        // polling continues unaffected.
                        eprintln!("⚠️  Fetch failed: {}", err);
                        None
                    }
                };
                self.poller.settle(fetched)
            }
        };

        match effect {
            Some(effect) => self.run(effect),
            None => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // The machine's sticky URL says whether any fetch has ever
        // succeeded; the handle carries that picture's pixels.
        let picture = self.poller.displayed().and(self.picture.as_ref());

        container(ui::cat_viewer(picture))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(40)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application("Cat show", CatShow::update, CatShow::view)
        .theme(CatShow::theme)
        .window_size(iced::Size::new(560.0, 720.0))
        .centered()
        .run_with(CatShow::new)
}
