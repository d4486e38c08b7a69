#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

#![windows_subsystem = "windows"]

use {
    std::path::Path,
    iced::{
        Align,
        Application,
        Button,
        Clipboard,
        Color,
        Column,
        Command,
        Container,
        Element,
        Image,
        Length,
        Settings,
        Text,
        TextInput,
        button,
        image,
        text_input
    },
    reqwest::blocking::Client,
    smart_default::SmartDefault,
    lessongen::{
        backend::Backend,
        form::FormState
    }
};

#[derive(Debug, Clone)]
enum Message {
    /// Handled by `FormMessage`
    Form(FormMessage),
    /// Sent when the user presses the Generate button
    Generate,
    /// Sent when a submission finishes, carrying the new status line
    Generated(String)
}

#[derive(SmartDefault)]
struct LessonGenerator {
    form: FormState,
    #[default(lessongen::client().expect("failed to create HTTP client"))]
    client: Client,
    #[default(Backend::production())]
    backend: Backend,
    /// A submission is in flight. The Generate button is disabled until
    /// `Message::Generated` clears this.
    busy: bool,
    topic: text_input::State,
    district: text_input::State,
    grade_level: text_input::State,
    subject_focus: text_input::State,
    custom_prompt: text_input::State,
    num_slides: text_input::State,
    generate_button: button::State
}

impl Application for LessonGenerator {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Flags = ();

    fn new(_flags: ()) -> (LessonGenerator, Command<Message>) {
        (LessonGenerator::default(), Command::none())
    }

    fn title(&self) -> String {
        format!("Teacherfy.ai - Lesson Generator")
    }

    fn update(&mut self, message: Message, _clipboard: &mut Clipboard) -> Command<Message> {
        match message {
            Message::Form(msg) => {
                msg.handle(&mut self.form);
                Command::none()
            }
            Message::Generate => {
                if self.busy { return Command::none(); }
                self.busy = true;
                let client = self.client.clone();
                let backend = self.backend.clone();
                let form = self.form.clone();
                Command::perform(
                    async move { lessongen::status_message(&lessongen::run(&client, &backend, &form, Path::new("."))) },
                    Message::Generated
                )
            }
            Message::Generated(status) => {
                self.busy = false;
                self.form.message = status;
                Command::none()
            }
        }
    }

    fn view(&mut self) -> Element<'_, Message> {
        let form = &self.form;
        let mut generate = Button::new(&mut self.generate_button, Text::new(if self.busy { "Generating..." } else { "Generate Presentation" })).padding(10);
        if !self.busy {
            generate = generate.on_press(Message::Generate);
        }
        let mut col = Column::new()
            .align_items(Align::Center)
            .max_width(600)
            .padding(20)
            .spacing(10)
            .push(Image::new(image::Handle::from_path("assets/teacherfy.png")).width(Length::Units(300)))
            .push(TextInput::new(&mut self.topic, "Enter lesson topic", &form.lesson_topic, |value| Message::Form(FormMessage::LessonTopic(value))).padding(10))
            .push(TextInput::new(&mut self.district, "Enter district", &form.district, |value| Message::Form(FormMessage::District(value))).padding(10))
            .push(TextInput::new(&mut self.grade_level, "Enter grade level", &form.grade_level, |value| Message::Form(FormMessage::GradeLevel(value))).padding(10))
            .push(TextInput::new(&mut self.subject_focus, "Enter subject focus", &form.subject_focus, |value| Message::Form(FormMessage::SubjectFocus(value))).padding(10))
            .push(TextInput::new(&mut self.custom_prompt, "Add specific instructions or details (optional)", &form.custom_prompt, |value| Message::Form(FormMessage::CustomPrompt(value))).padding(10))
            .push(TextInput::new(&mut self.num_slides, "Number of slides (1-10)", &form.num_slides, |value| Message::Form(FormMessage::NumSlides(value))).on_submit(Message::Generate).padding(10))
            .push(generate);
        if !form.message.is_empty() {
            col = col.push(Text::new(form.message.clone()).color(if form.message.contains("successfully") {
                Color::from_rgb(0.13, 0.54, 0.13)
            } else {
                Color::from_rgb(0.83, 0.18, 0.18)
            }));
        }
        Container::new(col)
            .width(Length::Fill)
            .center_x()
            .into()
    }
}

#[derive(Debug, Clone)]
enum FormMessage {
    LessonTopic(String),
    District(String),
    GradeLevel(String),
    SubjectFocus(String),
    CustomPrompt(String),
    NumSlides(String)
}

impl FormMessage {
    fn handle(self, form: &mut FormState) {
        match self {
            FormMessage::LessonTopic(value) => { form.lesson_topic = value; }
            FormMessage::District(value) => { form.district = value; }
            FormMessage::GradeLevel(value) => { form.grade_level = value; }
            FormMessage::SubjectFocus(value) => { form.subject_focus = value; }
            FormMessage::CustomPrompt(value) => { form.custom_prompt = value; }
            FormMessage::NumSlides(value) => { form.num_slides = value; }
        }
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    LessonGenerator::run(Settings::default())
}
