use jobby_core::{
    AppViewModel, FilterOptionView, JobDetailsPage, JobSummary, JobsView, LoginView, PageView,
    PanelView, Profile, ResultsView,
};

const RULE: &str = "------------------------------------------------------------";

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    if view.show_header {
        lines.push(format!("[ Home ]  [ Jobs ]  [ Logout ]        {}", view.route));
        lines.push(RULE.to_string());
    }
    match &view.page {
        PageView::Login(login) => render_login(&mut lines, login),
        PageView::Home => render_home(&mut lines),
        PageView::Jobs(jobs) => render_jobs(&mut lines, jobs),
        PageView::JobDetails(panel) => render_details(&mut lines, panel),
        PageView::NotFound => {
            lines.push("Page Not Found".to_string());
            lines.push(
                "We are sorry, the page you requested could not be found".to_string(),
            );
        }
    }
    lines
}

fn render_login(lines: &mut Vec<String>, login: &LoginView) {
    lines.push("LOGIN".to_string());
    lines.push(format!("USERNAME  {}", login.username));
    if let Some(err) = login.username_error {
        lines.push(format!("          {err}"));
    }
    lines.push(format!("PASSWORD  {}", "*".repeat(login.password_len)));
    if let Some(err) = login.password_error {
        lines.push(format!("          {err}"));
    }
    if login.submitting {
        lines.push("Logging in...".to_string());
    }
    if let Some(err) = &login.submit_error {
        lines.push(err.clone());
    }
}

fn render_home(lines: &mut Vec<String>) {
    lines.push("Find The Job That Fits Your Life".to_string());
    lines.push(
        "Millions of people are searching for jobs, salary information, company reviews. \
         Find the job that fits your abilities and potential."
            .to_string(),
    );
    lines.push("> jobs   (Find Jobs)".to_string());
}

fn render_jobs(lines: &mut Vec<String>, jobs: &JobsView) {
    match &jobs.profile {
        PanelView::Idle => {}
        PanelView::Loading => lines.push("Profile: loading...".to_string()),
        PanelView::Failed => lines.push("Profile: [ Retry ]  (retry profile)".to_string()),
        PanelView::Ready(profile) => render_profile(lines, profile),
    }
    lines.push(RULE.to_string());
    lines.push("Type of Employment".to_string());
    render_options(lines, &jobs.type_filters, "[x]", "[ ]");
    lines.push("Salary Range".to_string());
    render_options(lines, &jobs.salary_filters, "(o)", "( )");
    lines.push(RULE.to_string());
    lines.push(format!("Search: [{}]", jobs.search_text));

    match &jobs.results {
        ResultsView::Idle => {}
        ResultsView::Loading => lines.push("Loading...".to_string()),
        ResultsView::Failed => render_failure(lines, "retry jobs"),
        ResultsView::Empty => {
            lines.push("No Jobs Found".to_string());
            lines.push("We could not find any Jobs. Try other filters.".to_string());
        }
        ResultsView::Jobs(list) => {
            for job in list {
                render_job_card(lines, job);
            }
        }
    }
}

fn render_profile(lines: &mut Vec<String>, profile: &Profile) {
    lines.push(format!("{}  <{}>", profile.name, profile.profile_image_url));
    lines.push(profile.short_bio.clone());
}

fn render_options(lines: &mut Vec<String>, options: &[FilterOptionView], on: &str, off: &str) {
    for option in options {
        let mark = if option.selected { on } else { off };
        lines.push(format!("  {mark} {} ({})", option.label, option.id));
    }
}

fn render_failure(lines: &mut Vec<String>, retry_command: &str) {
    lines.push("Oops! Something Went Wrong".to_string());
    lines.push("We cannot seem to find the page you are looking for".to_string());
    lines.push(format!("[ Retry ]  ({retry_command})"));
}

fn render_job_card(lines: &mut Vec<String>, job: &JobSummary) {
    lines.push(RULE.to_string());
    lines.push(format!("{}  * {}   (open {})", job.title, job.rating, job.id));
    lines.push(format!(
        "{} | {} | {}",
        job.location, job.employment_type, job.package_per_annum
    ));
    lines.push(job.job_description.clone());
}

fn render_details(lines: &mut Vec<String>, panel: &PanelView<JobDetailsPage>) {
    let page = match panel {
        PanelView::Idle => return,
        PanelView::Loading => {
            lines.push("Loading...".to_string());
            return;
        }
        PanelView::Failed => {
            render_failure(lines, "retry details");
            return;
        }
        PanelView::Ready(page) => page,
    };

    let job = &page.job_details;
    lines.push(format!("{}  * {}", job.title, job.rating));
    lines.push(format!(
        "{} | {} | {}",
        job.location, job.employment_type, job.package_per_annum
    ));
    lines.push(RULE.to_string());
    lines.push(format!("Description   Visit: {}", job.company_website_url));
    lines.push(job.job_description.clone());
    if !job.skills.is_empty() {
        let skills: Vec<_> = job.skills.iter().map(|skill| skill.name.as_str()).collect();
        lines.push(format!("Skills: {}", skills.join(", ")));
    }
    lines.push("Life at company".to_string());
    lines.push(job.life_at_company.description.clone());

    if !page.similar_jobs.is_empty() {
        lines.push(RULE.to_string());
        lines.push("Similar Jobs".to_string());
        for similar in &page.similar_jobs {
            lines.push(format!(
                "  {}  * {}   (open {})",
                similar.title, similar.rating, similar.id
            ));
            lines.push(format!(
                "  {} | {}",
                similar.location, similar.employment_type
            ));
        }
    }
}
